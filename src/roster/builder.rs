//! Roster inference from source rows.

use tracing::debug;

use crate::classify::ColumnClassifier;
use crate::config::KeywordTables;
use crate::models::{EmployeeRecord, RawRow, RecordSource, SourceData, SourceKind};

use super::dedup::deduplicate;

/// Infers one employee record per row of a single source.
///
/// Payroll records carry pay and deduction data; benadmin and carrier
/// records carry a source tag instead.
pub fn extract_employees(
    rows: &[RawRow],
    source: SourceKind,
    keywords: &KeywordTables,
) -> Vec<EmployeeRecord> {
    let classifier = ColumnClassifier::new(keywords);

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let mut employee = EmployeeRecord::new(
                classifier.employee_id(row, source, index),
                classifier.employee_name(row, index),
            );

            match source {
                SourceKind::Payroll => {
                    employee.salary = classifier.pay_amount(row);
                    employee.deductions = classifier.deduction_items(row);
                }
                SourceKind::BenAdmin => employee.source = Some(RecordSource::BenAdmin),
                SourceKind::Carrier => employee.source = Some(RecordSource::Carrier),
            }

            employee
        })
        .collect()
}

/// Builds the deduplicated roster from all three sources.
///
/// Records are contributed payroll first, then benadmin, then carrier; the
/// first record for an identity wins. The result may be empty; substituting
/// a sample roster is the caller's decision.
///
/// # Example
///
/// ```
/// use benefits_recon::config::KeywordTables;
/// use benefits_recon::models::{RawRow, SourceData};
/// use benefits_recon::roster::build_roster;
///
/// let payroll = vec![RawRow::from_pairs([("ssn", "111"), ("name", "Ada Lovelace")])];
/// let carrier = vec![RawRow::from_pairs([("member_id", "111"), ("name", "A. Lovelace")])];
/// let data = SourceData::new(payroll, vec![], carrier);
///
/// let roster = build_roster(&data, &KeywordTables::default());
/// assert_eq!(roster.len(), 1);
/// assert_eq!(roster[0].name, "Ada Lovelace");
/// ```
pub fn build_roster(data: &SourceData, keywords: &KeywordTables) -> Vec<EmployeeRecord> {
    let mut employees = Vec::new();

    for source in SourceKind::ALL {
        let rows = data.rows(source);
        if rows.is_empty() {
            continue;
        }
        let extracted = extract_employees(rows, source, keywords);
        debug!(source = %source, employees = extracted.len(), "Extracted employees");
        employees.extend(extracted);
    }

    let contributed = employees.len();
    let roster = deduplicate(employees);
    debug!(
        contributed,
        unique = roster.len(),
        "Deduplicated roster"
    );
    roster
}
