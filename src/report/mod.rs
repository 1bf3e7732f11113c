//! Report assembly.
//!
//! Turns a roster size and a discrepancy list into the final
//! [`ReconciliationReport`](crate::models::ReconciliationReport).

mod assembler;

pub use assembler::{assemble_report, error_rate};
