//! Discrepancy models.
//!
//! A [`DiscrepancyRecord`] is one reconciliation finding for one employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a reconciliation finding.
///
/// The first three are produced by comparing real payroll and carrier rows;
/// the rest come from the synthetic scenario table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// Payroll deducts for the employee but the carrier bills nothing.
    #[serde(rename = "Missing Coverage")]
    MissingCoverage,
    /// The carrier bills for the employee but payroll deducts nothing.
    #[serde(rename = "Payroll Deduction Error")]
    PayrollDeductionError,
    /// Payroll deduction and carrier premium differ beyond tolerance.
    #[serde(rename = "Premium Mismatch")]
    PremiumMismatch,
    /// Coverage continues past termination.
    #[serde(rename = "Terminated Employee")]
    TerminatedEmployee,
    /// A new hire has no active coverage.
    #[serde(rename = "New Hire Missing")]
    NewHireMissing,
    /// Dependent counts disagree.
    #[serde(rename = "Dependent Mismatch")]
    DependentMismatch,
    /// Plan codes disagree.
    #[serde(rename = "Plan Code Error")]
    PlanCodeError,
    /// Coverage and payroll start dates disagree.
    #[serde(rename = "Effective Date Issue")]
    EffectiveDateIssue,
    /// The same coverage is deducted more than once.
    #[serde(rename = "Duplicate Deduction")]
    DuplicateDeduction,
}

impl ErrorType {
    /// The display name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::MissingCoverage => "Missing Coverage",
            ErrorType::PayrollDeductionError => "Payroll Deduction Error",
            ErrorType::PremiumMismatch => "Premium Mismatch",
            ErrorType::TerminatedEmployee => "Terminated Employee",
            ErrorType::NewHireMissing => "New Hire Missing",
            ErrorType::DependentMismatch => "Dependent Mismatch",
            ErrorType::PlanCodeError => "Plan Code Error",
            ErrorType::EffectiveDateIssue => "Effective Date Issue",
            ErrorType::DuplicateDeduction => "Duplicate Deduction",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review priority of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Needs attention soon.
    Medium,
    /// Informational.
    Low,
}

impl Priority {
    /// Derives priority from a discrepancy amount.
    ///
    /// `amount > 500` is High, `amount > 200` is Medium, anything else is Low.
    ///
    /// # Example
    ///
    /// ```
    /// use benefits_recon::models::Priority;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Priority::from_amount(Decimal::new(50001, 2)), Priority::High);
    /// assert_eq!(Priority::from_amount(Decimal::from(500)), Priority::Medium);
    /// assert_eq!(Priority::from_amount(Decimal::from(200)), Priority::Low);
    /// ```
    pub fn from_amount(amount: Decimal) -> Self {
        if amount > Decimal::from(500) {
            Priority::High
        } else if amount > Decimal::from(200) {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => f.write_str("High"),
            Priority::Medium => f.write_str("Medium"),
            Priority::Low => f.write_str("Low"),
        }
    }
}

/// Review status of a finding. Only the initial state is modelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Awaiting review.
    #[default]
    #[serde(rename = "Pending Review")]
    PendingReview,
}

/// One reconciliation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    /// ID of the employee the finding concerns.
    pub employee_id: String,
    /// Name of the employee the finding concerns.
    pub employee_name: String,
    /// Finding category.
    pub error_type: ErrorType,
    /// Human-readable explanation.
    pub description: String,
    /// Financial magnitude of the finding; never negative.
    pub amount: Decimal,
    /// Review priority.
    pub priority: Priority,
    /// Review status.
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_thresholds() {
        assert_eq!(Priority::from_amount(Decimal::new(90000, 2)), Priority::High);
        assert_eq!(Priority::from_amount(Decimal::new(50001, 2)), Priority::High);
        assert_eq!(Priority::from_amount(Decimal::from(500)), Priority::Medium);
        assert_eq!(Priority::from_amount(Decimal::new(20001, 2)), Priority::Medium);
        assert_eq!(Priority::from_amount(Decimal::from(200)), Priority::Low);
        assert_eq!(Priority::from_amount(Decimal::ZERO), Priority::Low);
    }

    #[test]
    fn test_error_type_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&ErrorType::PremiumMismatch).unwrap(),
            "\"Premium Mismatch\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorType::EffectiveDateIssue).unwrap(),
            "\"Effective Date Issue\""
        );
        assert_eq!(ErrorType::PayrollDeductionError.to_string(), "Payroll Deduction Error");
    }

    #[test]
    fn test_status_defaults_to_pending_review() {
        assert_eq!(Status::default(), Status::PendingReview);
        assert_eq!(
            serde_json::to_string(&Status::PendingReview).unwrap(),
            "\"Pending Review\""
        );
    }

    #[test]
    fn test_discrepancy_serialization_shape() {
        let record = DiscrepancyRecord {
            employee_id: "123-45-6789".to_string(),
            employee_name: "Ada Lovelace".to_string(),
            error_type: ErrorType::MissingCoverage,
            description: "Employee has payroll deduction but no corresponding carrier coverage"
                .to_string(),
            amount: Decimal::new(24500, 2),
            priority: Priority::High,
            status: Status::PendingReview,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["error_type"], "Missing Coverage");
        assert_eq!(value["priority"], "High");
        assert_eq!(value["status"], "Pending Review");
        assert_eq!(value["amount"], "245.00");
    }
}
