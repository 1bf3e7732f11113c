//! Core data models for the reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod discrepancy;
mod employee;
mod raw_row;
mod report;
mod source;
mod source_data;

pub use discrepancy::{DiscrepancyRecord, ErrorType, Priority, Status};
pub use employee::{Deduction, EmployeeRecord, RecordSource};
pub use raw_row::RawRow;
pub use report::{AnnotatedReport, DEFAULT_TIME_SAVED, ReconciliationReport, ReportMetadata};
pub use source::{SourceKind, placeholder_id};
pub use source_data::SourceData;
