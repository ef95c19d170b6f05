//! Statistical routines for summarizing runs and comparing groups.
//!
//! - [`descriptive`] - Mean and standard deviations
//! - [`ranks`] - Average ranks with tie bookkeeping
//! - [`special`] - Incomplete gamma based distribution tails
//! - [`kruskal`] - Kruskal-Wallis H test
//! - [`dunn`] - Dunn's post-hoc test with Bonferroni adjustment

pub mod descriptive;
pub mod dunn;
pub mod kruskal;
pub mod ranks;
pub mod special;
