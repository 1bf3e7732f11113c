//! Employee model and related types.
//!
//! This module defines the unified [`EmployeeRecord`] that the roster builder
//! infers from heterogeneous source rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which non-payroll source contributed a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Inferred from the benefits-administration export.
    #[serde(rename = "benadmin")]
    BenAdmin,
    /// Inferred from the carrier billing export.
    Carrier,
}

/// A single payroll deduction line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// The column the deduction was read from (e.g. "medical_deduction").
    #[serde(rename = "type")]
    pub label: String,
    /// The deduction amount; always positive.
    pub amount: Decimal,
}

/// An employee inferred from one or more source files.
///
/// # Example
///
/// ```
/// use benefits_recon::models::EmployeeRecord;
///
/// let employee = EmployeeRecord::new("123-45-6789", "Ada Lovelace");
/// assert!(employee.salary.is_none());
/// assert!(employee.deductions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Identity column value, or a per-source placeholder such as `EMP1003`.
    pub employee_id: String,
    /// Display name, or a placeholder such as `Employee 4`.
    pub name: String,
    /// Pay amount; only set for payroll-origin records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    /// Payroll deduction line items; only populated for payroll-origin records.
    #[serde(default)]
    pub deductions: Vec<Deduction>,
    /// Origin tag for benadmin and carrier records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<RecordSource>,
}

impl EmployeeRecord {
    /// Creates a record with no pay data and no source tag.
    pub fn new(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            salary: None,
            deductions: Vec::new(),
            source: None,
        }
    }
}
