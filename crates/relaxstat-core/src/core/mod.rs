//! # Core Module
//!
//! Fundamental data structures, file formats and statistics used by the engine.
//!
//! - **Data Models** ([`models`]) - Metrics, run records and groups of values
//! - **File I/O** ([`io`]) - Relax logs, summary tables, raw-value and comparison tables
//! - **Statistics** ([`stats`]) - Descriptive statistics, tie-aware ranking,
//!   Kruskal-Wallis and Dunn's post-hoc test

pub mod io;
pub mod models;
pub mod stats;
