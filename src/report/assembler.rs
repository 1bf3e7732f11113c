//! Builds the terminal report of a reconciliation run.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::ReportConfig;
use crate::models::{DiscrepancyRecord, ReconciliationReport};

/// Rounded percentage of employees with findings.
///
/// Uses half-to-even rounding and returns `0` for an empty roster.
///
/// # Example
///
/// ```
/// use benefits_recon::report::error_rate;
///
/// assert_eq!(error_rate(2, 15), 13);
/// assert_eq!(error_rate(1, 8), 12);
/// assert_eq!(error_rate(5, 0), 0);
/// ```
pub fn error_rate(errors_found: usize, total_employees: usize) -> u64 {
    if total_employees == 0 {
        return 0;
    }

    let rate = Decimal::from(errors_found) * Decimal::ONE_HUNDRED / Decimal::from(total_employees);
    rate.round().to_u64().unwrap_or(0)
}

/// Assembles the report for one run.
pub fn assemble_report(
    total_employees: usize,
    discrepancies: Vec<DiscrepancyRecord>,
    files_processed: usize,
    config: &ReportConfig,
) -> ReconciliationReport {
    let errors_found = discrepancies.len();

    ReconciliationReport {
        total_employees,
        errors_found,
        error_rate: error_rate(errors_found, total_employees),
        time_saved: config.time_saved.clone(),
        files_processed,
        discrepancies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ErrorType, Priority, Status};
    use proptest::prelude::*;

    fn discrepancy(id: &str) -> DiscrepancyRecord {
        DiscrepancyRecord {
            employee_id: id.to_string(),
            employee_name: "Ada Lovelace".to_string(),
            error_type: ErrorType::DuplicateDeduction,
            description: "Multiple payroll deductions found for same coverage type".to_string(),
            amount: Decimal::new(31250, 2),
            priority: Priority::Medium,
            status: Status::PendingReview,
        }
    }

    #[test]
    fn test_report_counts() {
        let report = assemble_report(
            4,
            vec![discrepancy("E1"), discrepancy("E2"), discrepancy("E3")],
            2,
            &ReportConfig::default(),
        );

        assert_eq!(report.total_employees, 4);
        assert_eq!(report.errors_found, 3);
        assert_eq!(report.error_rate, 75);
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.time_saved, "3.75 hrs");
    }

    #[test]
    fn test_half_rounds_to_even() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(error_rate(1, 8), 12);
        assert_eq!(error_rate(3, 8), 38);
    }

    #[test]
    fn test_rate_may_exceed_one_hundred() {
        assert_eq!(error_rate(30, 15), 200);
    }

    #[test]
    fn test_empty_roster_rate_is_zero() {
        let report = assemble_report(0, vec![], 0, &ReportConfig::default());
        assert_eq!(report.error_rate, 0);
        assert!(report.discrepancies.is_empty());
    }

    proptest! {
        #[test]
        fn prop_rate_is_nearest_whole_percent(errors in 0usize..200, total in 1usize..200) {
            let rate = error_rate(errors, total) as i64;
            let exact = Decimal::from(errors) * Decimal::ONE_HUNDRED / Decimal::from(total);
            let distance = (Decimal::from(rate) - exact).abs();
            prop_assert!(distance <= Decimal::new(5, 1));
        }
    }
}
