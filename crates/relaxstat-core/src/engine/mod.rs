//! # Engine Module
//!
//! Turns directories of simulation output into ranked records and group statistics.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Scan and comparison parameters with validating builders
//! - **Scanning** ([`scanner`]) - Locating run directories, their logs and model files
//! - **Ranking** ([`ranking`]) - Top-N selection and per-column summary statistics
//! - **Comparison** ([`comparator`]) - Group collection from summary tables and baseline tests
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Per-run and per-group problems (missing files, unreadable logs, absent columns) are
//! reported and skipped; only problems with the batch as a whole surface as errors.

pub mod comparator;
pub mod config;
pub mod error;
pub mod progress;
pub mod ranking;
pub mod scanner;
