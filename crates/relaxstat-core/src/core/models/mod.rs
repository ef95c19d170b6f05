//! Data models shared by the scanner and the comparator.

pub mod group;
pub mod metric;
pub mod record;
