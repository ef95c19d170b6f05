pub mod compare;
pub mod summarize;
