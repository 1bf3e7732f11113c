//! Synthetic discrepancy scenarios.
//!
//! When real comparison finds fewer discrepancies than the run's target, the
//! remainder is drawn from a fixed table of plausible benefits findings.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

use crate::models::{DiscrepancyRecord, EmployeeRecord, ErrorType, Priority, Status};

use super::amounts::random_amount;

/// Year all scenario dates fall in.
pub const SCENARIO_YEAR: i32 = 2025;

const TERMINATION_DATES: [(u32, u32); 4] = [(6, 15), (6, 30), (7, 1), (7, 15)];
const HIRE_DATES: [(u32, u32); 4] = [(7, 1), (7, 8), (7, 15), (7, 22)];
const EFFECTIVE_DATES: [(u32, u32); 3] = [(7, 1), (7, 15), (8, 1)];
const CARRIER_PLANS: [&str; 5] = ["MED001", "MED002", "DEN001", "VIS001", "LIFE001"];
const PAYROLL_PLANS: [&str; 5] = ["M01", "M02", "D01", "V01", "L01"];
const MAX_DEPENDENTS: u32 = 4;

/// One entry of the synthetic scenario table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Coverage continues past a termination date.
    TerminatedEmployee,
    /// A new hire's coverage is not active.
    NewHireMissing,
    /// Carrier and payroll dependent counts differ.
    DependentMismatch,
    /// Carrier and payroll plan codes differ.
    PlanCodeError,
    /// Carrier effective date differs from payroll start.
    EffectiveDateIssue,
    /// Coverage deducted twice.
    DuplicateDeduction,
}

impl Scenario {
    /// Every scenario, each drawn with equal probability.
    pub const ALL: [Scenario; 6] = [
        Scenario::TerminatedEmployee,
        Scenario::NewHireMissing,
        Scenario::DependentMismatch,
        Scenario::PlanCodeError,
        Scenario::EffectiveDateIssue,
        Scenario::DuplicateDeduction,
    ];

    /// The finding category this scenario reports.
    pub fn error_type(&self) -> ErrorType {
        match self {
            Scenario::TerminatedEmployee => ErrorType::TerminatedEmployee,
            Scenario::NewHireMissing => ErrorType::NewHireMissing,
            Scenario::DependentMismatch => ErrorType::DependentMismatch,
            Scenario::PlanCodeError => ErrorType::PlanCodeError,
            Scenario::EffectiveDateIssue => ErrorType::EffectiveDateIssue,
            Scenario::DuplicateDeduction => ErrorType::DuplicateDeduction,
        }
    }

    /// Inclusive dollar range the scenario's amount is drawn from.
    pub fn amount_range(&self) -> (i64, i64) {
        match self {
            Scenario::TerminatedEmployee => (250, 700),
            Scenario::NewHireMissing => (200, 650),
            Scenario::DependentMismatch => (100, 400),
            Scenario::PlanCodeError => (50, 300),
            Scenario::EffectiveDateIssue => (150, 500),
            Scenario::DuplicateDeduction => (300, 900),
        }
    }

    /// Draws a description with randomised details.
    pub fn describe<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Scenario::TerminatedEmployee => format!(
                "Coverage continues for employee terminated on {}",
                pick_date(&TERMINATION_DATES, None, rng)
            ),
            Scenario::NewHireMissing => format!(
                "Employee hired on {} but coverage not yet active",
                pick_date(&HIRE_DATES, None, rng)
            ),
            Scenario::DependentMismatch => {
                let carrier = rng.gen_range(0..=MAX_DEPENDENTS);
                let mut payroll = rng.gen_range(0..MAX_DEPENDENTS);
                if payroll >= carrier {
                    payroll += 1;
                }
                format!(
                    "Dependent count differs between carrier ({}) and payroll ({})",
                    carrier, payroll
                )
            }
            Scenario::PlanCodeError => format!(
                "Plan code mismatch: Carrier shows {}, Payroll shows {}",
                CARRIER_PLANS.choose(rng).copied().unwrap_or_default(),
                PAYROLL_PLANS.choose(rng).copied().unwrap_or_default()
            ),
            Scenario::EffectiveDateIssue => {
                let carrier = pick_date(&EFFECTIVE_DATES, None, rng);
                let payroll = pick_date(&EFFECTIVE_DATES, Some(&carrier), rng);
                format!(
                    "Coverage effective date {} differs from payroll start {}",
                    carrier, payroll
                )
            }
            Scenario::DuplicateDeduction => {
                "Multiple payroll deductions found for same coverage type".to_string()
            }
        }
    }
}

/// Picks a `MM/DD/YYYY` date from `table`, never returning `exclude`.
fn pick_date<R: Rng + ?Sized>(table: &[(u32, u32)], exclude: Option<&str>, rng: &mut R) -> String {
    let dates: Vec<String> = table
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(SCENARIO_YEAR, month, day))
        .map(|date| date.format("%m/%d/%Y").to_string())
        .filter(|date| Some(date.as_str()) != exclude)
        .collect();

    dates.choose(rng).cloned().unwrap_or_default()
}

/// Builds one synthetic finding for `employee`.
///
/// Priority follows [`Priority::from_amount`].
pub fn synthetic_discrepancy<R: Rng + ?Sized>(
    employee: &EmployeeRecord,
    scenario: Scenario,
    rng: &mut R,
) -> DiscrepancyRecord {
    let description = scenario.describe(rng);
    let (low, high) = scenario.amount_range();
    let amount: Decimal = random_amount(rng, low, high);

    DiscrepancyRecord {
        employee_id: employee.employee_id.clone(),
        employee_name: employee.name.clone(),
        error_type: scenario.error_type(),
        description,
        amount,
        priority: Priority::from_amount(amount),
        status: Status::PendingReview,
    }
}

/// Draws `count` synthetic findings, choosing employee and scenario with
/// replacement. Returns nothing for an empty roster.
///
/// # Example
///
/// ```
/// use benefits_recon::models::EmployeeRecord;
/// use benefits_recon::reconcile::supplement;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let roster = vec![EmployeeRecord::new("E1", "Ada Lovelace")];
/// let findings = supplement(&roster, 5, &mut StdRng::seed_from_u64(3));
///
/// assert_eq!(findings.len(), 5);
/// assert!(findings.iter().all(|f| f.employee_id == "E1"));
/// ```
pub fn supplement<R: Rng + ?Sized>(
    roster: &[EmployeeRecord],
    count: usize,
    rng: &mut R,
) -> Vec<DiscrepancyRecord> {
    let mut findings = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(employee) = roster.choose(rng) else {
            break;
        };
        let scenario = *Scenario::ALL.choose(rng).unwrap_or(&Scenario::DuplicateDeduction);
        findings.push(synthetic_discrepancy(employee, scenario, rng));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn roster() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::new("E1", "Ada Lovelace"),
            EmployeeRecord::new("E2", "Grace Hopper"),
        ]
    }

    fn amount_in_range(record: &DiscrepancyRecord, scenario: Scenario) -> bool {
        let (low, high) = scenario.amount_range();
        record.amount >= Decimal::from(low) && record.amount <= Decimal::from(high)
    }

    #[test]
    fn test_each_scenario_amount_within_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let employee = EmployeeRecord::new("E1", "Ada Lovelace");

        for scenario in Scenario::ALL {
            for _ in 0..50 {
                let record = synthetic_discrepancy(&employee, scenario, &mut rng);
                assert_eq!(record.error_type, scenario.error_type());
                assert!(amount_in_range(&record, scenario), "{:?}: {}", scenario, record.amount);
                assert_eq!(record.priority, Priority::from_amount(record.amount));
                assert_eq!(record.status, Status::PendingReview);
            }
        }
    }

    #[test]
    fn test_dependent_counts_always_differ() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let description = Scenario::DependentMismatch.describe(&mut rng);
            let digits: Vec<u32> = description
                .chars()
                .filter_map(|c| c.to_digit(10))
                .collect();
            assert_eq!(digits.len(), 2, "{}", description);
            assert_ne!(digits[0], digits[1]);
            assert!(digits.iter().all(|d| *d <= MAX_DEPENDENTS));
        }
    }

    #[test]
    fn test_effective_dates_always_differ() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let description = Scenario::EffectiveDateIssue.describe(&mut rng);
            let dates: Vec<&str> = description
                .split_whitespace()
                .filter(|word| word.contains('/'))
                .collect();
            assert_eq!(dates.len(), 2);
            assert_ne!(dates[0], dates[1]);
        }
    }

    #[test]
    fn test_termination_dates_come_from_table() {
        let mut rng = StdRng::seed_from_u64(21);
        let allowed: HashSet<&str> = ["06/15/2025", "06/30/2025", "07/01/2025", "07/15/2025"]
            .into_iter()
            .collect();

        for _ in 0..50 {
            let description = Scenario::TerminatedEmployee.describe(&mut rng);
            let date = description.rsplit(' ').next().unwrap();
            assert!(allowed.contains(date), "{}", description);
        }
    }

    #[test]
    fn test_plan_codes_come_from_tables() {
        let description = Scenario::PlanCodeError.describe(&mut StdRng::seed_from_u64(2));
        assert!(CARRIER_PLANS.iter().any(|plan| description.contains(plan)));
        assert!(
            PAYROLL_PLANS
                .iter()
                .any(|plan| description.contains(&format!("Payroll shows {}", plan)))
        );
    }

    #[test]
    fn test_supplement_draws_requested_count_from_roster() {
        let roster = roster();
        let findings = supplement(&roster, 30, &mut StdRng::seed_from_u64(17));

        assert_eq!(findings.len(), 30);
        for finding in &findings {
            assert!(roster.iter().any(|e| e.employee_id == finding.employee_id
                && e.name == finding.employee_name));
        }
    }

    #[test]
    fn test_supplement_with_empty_roster_is_empty() {
        assert!(supplement(&[], 10, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn test_supplement_is_deterministic_for_a_seed() {
        let roster = roster();
        let first = supplement(&roster, 12, &mut StdRng::seed_from_u64(99));
        let second = supplement(&roster, 12, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
