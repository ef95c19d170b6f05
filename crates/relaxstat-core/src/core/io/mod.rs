//! Provides input/output functionality for the text formats of a relax campaign.
//!
//! Relax logs are scraped for a handful of marker phrases, summary tables carry the
//! ranked models followed by a statistics block, and comparison tables hold raw group
//! values and baseline test results. Every format is exposed through the traits in
//! [`traits`].

pub mod comparison;
pub mod relax_log;
pub mod summary;
pub mod traits;
