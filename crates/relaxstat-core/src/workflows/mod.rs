//! # Workflows Module
//!
//! End-to-end procedures built from the engine and core layers.
//!
//! - **Summarize Workflow** ([`summarize`]) - Scan a directory of relax runs, rank them by
//!   score and write the summary table.
//! - **Compare Workflow** ([`compare`]) - Collect one column from the summary table of every
//!   group and test each group against a baseline.
//!
//! Both workflows report progress through a [`ProgressReporter`](crate::engine::progress::ProgressReporter)
//! and return a report describing what was produced.

pub mod compare;
pub mod summarize;
