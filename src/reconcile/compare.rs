//! Payroll versus carrier comparison.
//!
//! Rows are paired by the value of their first column, which is assumed to
//! carry the identity key in both exports. Each key is resolved against the
//! roster and classified as one-sided or as a premium mismatch.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::classify::ColumnClassifier;
use crate::config::ReconConfig;
use crate::models::{
    DiscrepancyRecord, EmployeeRecord, ErrorType, Priority, RawRow, SourceData, Status,
    placeholder_id,
};

use super::amounts::filler_amount;

/// Base number for lookup keys of rows whose first column is blank.
///
/// Both sources use the same base, so blank-keyed rows pair up by position.
pub const LOOKUP_ID_OFFSET: usize = 1000;

/// Rows keyed by lookup key, with keys in first-seen order.
struct KeyedRows<'a> {
    order: Vec<String>,
    rows: HashMap<String, &'a RawRow>,
}

impl<'a> KeyedRows<'a> {
    /// Keys every row; a later row with the same key replaces the earlier one.
    fn new(rows: &'a [RawRow]) -> Self {
        let mut keyed = Self {
            order: Vec::new(),
            rows: HashMap::new(),
        };

        for (index, row) in rows.iter().enumerate() {
            let key = row
                .first_value()
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| placeholder_id(LOOKUP_ID_OFFSET + index));

            if keyed.rows.insert(key.clone(), row).is_none() {
                keyed.order.push(key);
            }
        }

        keyed
    }

    fn get(&self, key: &str) -> Option<&'a RawRow> {
        self.rows.get(key).copied()
    }
}

/// Compares payroll rows to carrier rows and reports real discrepancies.
///
/// Only runs when both sources have rows. Keys are visited payroll-first in
/// row order, then carrier-only keys in row order; keys without a roster
/// record of the same `employee_id` are skipped.
///
/// - payroll only: `Missing Coverage`, amount = payroll deduction, High.
/// - carrier only: `Payroll Deduction Error`, amount = carrier premium, High.
/// - both: `Premium Mismatch` when the difference exceeds the tolerance,
///   High above the configured threshold, otherwise Medium.
///
/// These priorities do not follow [`Priority::from_amount`]; whenever the
/// two disagree it is logged at debug level.
pub fn compare_payroll_carrier<R: Rng + ?Sized>(
    data: &SourceData,
    roster: &[EmployeeRecord],
    config: &ReconConfig,
    rng: &mut R,
) -> Vec<DiscrepancyRecord> {
    if data.payroll.is_empty() || data.carrier.is_empty() {
        return Vec::new();
    }

    let classifier = ColumnClassifier::new(&config.keywords);
    let payroll = KeyedRows::new(&data.payroll);
    let carrier = KeyedRows::new(&data.carrier);

    let mut by_id: HashMap<&str, &EmployeeRecord> = HashMap::new();
    for employee in roster {
        by_id.entry(employee.employee_id.as_str()).or_insert(employee);
    }

    let payroll_keys: HashSet<&str> = payroll.order.iter().map(String::as_str).collect();
    let keys = payroll.order.iter().chain(
        carrier
            .order
            .iter()
            .filter(|key| !payroll_keys.contains(key.as_str())),
    );

    let mut discrepancies = Vec::new();

    for key in keys {
        let Some(employee) = by_id.get(key.as_str()) else {
            continue;
        };

        let outcome = match (payroll.get(key), carrier.get(key)) {
            (Some(payroll_row), None) => {
                let amount = payroll_deduction(&classifier, payroll_row, rng);
                Some(finding(
                    employee,
                    ErrorType::MissingCoverage,
                    "Employee has payroll deduction but no corresponding carrier coverage"
                        .to_string(),
                    amount,
                    Priority::High,
                ))
            }
            (None, Some(carrier_row)) => {
                let amount = carrier_premium(&classifier, carrier_row, rng).abs();
                Some(finding(
                    employee,
                    ErrorType::PayrollDeductionError,
                    "Employee has carrier coverage but no payroll deduction recorded".to_string(),
                    amount,
                    Priority::High,
                ))
            }
            (Some(payroll_row), Some(carrier_row)) => {
                let deduction = payroll_deduction(&classifier, payroll_row, rng);
                let premium = carrier_premium(&classifier, carrier_row, rng);
                premium_mismatch(employee, deduction, premium, config)
            }
            (None, None) => None,
        };

        if let Some(discrepancy) = outcome {
            discrepancies.push(discrepancy);
        }
    }

    debug!(
        payroll_keys = payroll.order.len(),
        carrier_keys = carrier.order.len(),
        discrepancies = discrepancies.len(),
        "Compared payroll and carrier rows"
    );

    discrepancies
}

/// Compares one employee's deduction and premium.
///
/// Returns `None` when the absolute difference is within tolerance or too
/// large to represent.
///
/// # Example
///
/// ```
/// use benefits_recon::config::ReconConfig;
/// use benefits_recon::models::{EmployeeRecord, Priority};
/// use benefits_recon::reconcile::premium_mismatch;
/// use rust_decimal::Decimal;
///
/// let config = ReconConfig::default();
/// let employee = EmployeeRecord::new("111", "Ada Lovelace");
///
/// let within = premium_mismatch(&employee, Decimal::from(300), Decimal::from(304), &config);
/// assert!(within.is_none());
///
/// let beyond =
///     premium_mismatch(&employee, Decimal::from(300), Decimal::from(420), &config).unwrap();
/// assert_eq!(beyond.amount, Decimal::from(120));
/// assert_eq!(beyond.priority, Priority::High);
/// ```
pub fn premium_mismatch(
    employee: &EmployeeRecord,
    deduction: Decimal,
    premium: Decimal,
    config: &ReconConfig,
) -> Option<DiscrepancyRecord> {
    let Some(difference) = premium.checked_sub(deduction).map(|d| d.abs()) else {
        debug!(
            employee_id = %employee.employee_id,
            premium = %premium,
            deduction = %deduction,
            "Premium and deduction too far apart to compare"
        );
        return None;
    };
    if difference <= config.comparison.tolerance {
        return None;
    }

    let priority = if difference > config.comparison.high_mismatch_threshold {
        Priority::High
    } else {
        Priority::Medium
    };

    Some(finding(
        employee,
        ErrorType::PremiumMismatch,
        format!(
            "Carrier premium ${:.2} differs from payroll deduction ${:.2}",
            premium, deduction
        ),
        difference,
        priority,
    ))
}

/// Payroll deduction for comparison: deduction columns, then pay, then filler.
fn payroll_deduction<R: Rng + ?Sized>(
    classifier: &ColumnClassifier<'_>,
    row: &RawRow,
    rng: &mut R,
) -> Decimal {
    classifier
        .deduction_total(row)
        .or_else(|| classifier.pay_amount(row).filter(|pay| *pay > Decimal::ZERO))
        .unwrap_or_else(|| filler_amount(rng))
}

/// Carrier premium for comparison: the first numeric premium column, else filler.
fn carrier_premium<R: Rng + ?Sized>(
    classifier: &ColumnClassifier<'_>,
    row: &RawRow,
    rng: &mut R,
) -> Decimal {
    classifier
        .carrier_premium(row)
        .unwrap_or_else(|| filler_amount(rng))
}

fn finding(
    employee: &EmployeeRecord,
    error_type: ErrorType,
    description: String,
    amount: Decimal,
    priority: Priority,
) -> DiscrepancyRecord {
    let derived = Priority::from_amount(amount);
    if derived != priority {
        debug!(
            employee_id = %employee.employee_id,
            error_type = %error_type,
            amount = %amount,
            assigned = %priority,
            derived = %derived,
            "Comparison priority overrides amount-based priority"
        );
    }

    DiscrepancyRecord {
        employee_id: employee.employee_id.clone(),
        employee_name: employee.name.clone(),
        error_type,
        description,
        amount,
        priority,
        status: Status::PendingReview,
    }
}
