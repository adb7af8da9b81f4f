//! Command implementations.

pub mod category;
pub mod completions;
pub mod garage;
pub mod sql;
pub mod version;
