//! Column classification for heterogeneous source files.
//!
//! This module locates identity, name and monetary columns by keyword and
//! coerces cell text to amounts.

mod columns;
mod numeric;

pub use columns::{ColumnClassifier, matches_keyword};
pub use numeric::parse_amount;
