//! Tabular input for the reconciliation engine.
//!
//! Turns uploaded byte streams into ordered [`crate::models::RawRow`] lists.

mod reader;

pub use reader::{parse_rows, read_rows, try_read_rows};
