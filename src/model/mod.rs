//! Data models for Vexim.
//!
//! This module contains the two domain models:
//! - Vehicle
//! - CategoryOption

pub mod category;
pub mod vehicle;

pub use category::{builtin_categories, normalize_value, CategoryOption, BUILTIN_CATEGORIES};
pub use vehicle::Vehicle;
