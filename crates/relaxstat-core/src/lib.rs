//! # relaxstat Core Library
//!
//! Post-processing for relaxed protein/RNA complex simulations: scraping run logs,
//! ranking runs by score, summarizing the best models, and comparing groups of runs
//! with rank-based statistics.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that parsing, statistics and
//! orchestration stay independent and testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`RunRecord`, `Group`),
//!   file formats (relax logs, summary tables, comparison tables) and pure
//!   statistical routines (descriptive statistics, Kruskal-Wallis, Dunn's test).
//!
//! - **[`engine`]: The Logic Core.** Directory scanning, top-N ranking, column
//!   summaries, group collection and baseline comparisons, together with their
//!   configuration, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** End-to-end `summarize` and `compare`
//!   procedures that read inputs, run the engine and write every output file.

pub mod core;
pub mod engine;
pub mod workflows;
