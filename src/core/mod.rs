//! Core adjustment modules
//!
//! This module contains the table width engine:
//! - `tabular`: locating, measuring and re-specifying `tabular` environments
//! - `options`: width thresholds

pub mod options;
pub mod tabular;

// Re-export main types and functions
pub use options::WidthOptions;
pub use tabular::{adjust_table, adjust_tables, plan_tables, TableReport};
