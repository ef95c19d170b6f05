pub mod builder;
pub mod defaults;
pub mod file;
