//! Discrepancy detection.
//!
//! Reconciliation runs in two phases. Phase A compares payroll deductions to
//! carrier premiums row by row. Phase B tops the result up with synthetic
//! findings until the run's target count is reached.

mod amounts;
mod compare;
mod synthetic;

pub use amounts::{FILLER_MAX_DOLLARS, FILLER_MIN_DOLLARS, filler_amount, random_amount};
pub use compare::{LOOKUP_ID_OFFSET, compare_payroll_carrier, premium_mismatch};
pub use synthetic::{SCENARIO_YEAR, Scenario, supplement, synthetic_discrepancy};

use rand::Rng;
use tracing::debug;

use crate::config::ReconConfig;
use crate::models::{DiscrepancyRecord, EmployeeRecord, SourceData};

/// Produces the discrepancy list for a roster.
///
/// Phase A findings come first in key order. Phase B appends synthetic
/// findings only when Phase A fell short of
/// [`ReconConfig::discrepancy_target`]; Phase A results are never truncated.
pub fn reconcile<R: Rng + ?Sized>(
    data: &SourceData,
    roster: &[EmployeeRecord],
    config: &ReconConfig,
    rng: &mut R,
) -> Vec<DiscrepancyRecord> {
    let mut discrepancies = compare_payroll_carrier(data, roster, config, rng);
    let real = discrepancies.len();

    let target = config.discrepancy_target(roster.len());
    let shortfall = target.saturating_sub(real);
    if shortfall > 0 {
        discrepancies.extend(supplement(roster, shortfall, rng));
    }

    debug!(
        real,
        synthetic = discrepancies.len() - real,
        target,
        "Reconciliation finished"
    );

    discrepancies
}
