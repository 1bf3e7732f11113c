//! First-wins roster deduplication.

use std::collections::HashSet;

use crate::models::EmployeeRecord;

/// Removes duplicate employees, keeping the first record for each identity.
///
/// A record with a non-empty `employee_id` is kept if no earlier record had
/// that ID. A record without an ID is kept if its name is non-empty and no
/// earlier ID-less record had that name. Everything else is dropped; fields
/// of dropped records are never merged into the survivor.
///
/// # Example
///
/// ```
/// use benefits_recon::models::EmployeeRecord;
/// use benefits_recon::roster::deduplicate;
///
/// let roster = deduplicate(vec![
///     EmployeeRecord::new("E1", "Ada"),
///     EmployeeRecord::new("E1", "Ada (benadmin)"),
///     EmployeeRecord::new("", "Grace"),
///     EmployeeRecord::new("", "Grace"),
/// ]);
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[0].name, "Ada");
/// ```
pub fn deduplicate(employees: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    employees
        .into_iter()
        .filter(|employee| {
            if !employee.employee_id.is_empty() {
                seen_ids.insert(employee.employee_id.clone())
            } else if !employee.name.is_empty() {
                seen_names.insert(employee.name.clone())
            } else {
                false
            }
        })
        .collect()
}
