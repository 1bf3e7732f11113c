//! Benefits Reconciliation Engine
//!
//! This crate compares an employer group's payroll export, benefits
//! administration export and insurance carrier bill, and reports the
//! discrepancies between them. Column meanings are inferred from header
//! keywords, so the three files need no fixed layout.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod roster;
