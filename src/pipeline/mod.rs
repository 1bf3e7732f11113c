//! End-to-end reconciliation runs.
//!
//! A [`Reconciler`] takes up to three seekable streams and returns a
//! [`ReconciliationReport`](crate::models::ReconciliationReport). It never
//! fails: unreadable sources are treated as absent and an empty roster is
//! replaced with a sample one.

mod reconciler;
mod sources;

pub use reconciler::Reconciler;
pub use sources::{MINIMUM_SOURCES, SourceFiles, ensure_minimum_sources};
