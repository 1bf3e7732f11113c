//! Sample roster used when no source yields any employee.

use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, SourceKind};

/// First names drawn for sample employees.
pub const SAMPLE_FIRST_NAMES: [&str; 10] = [
    "John", "Sarah", "Michael", "Jennifer", "David", "Lisa", "Robert", "Mary", "James", "Patricia",
];

/// Last names drawn for sample employees.
pub const SAMPLE_LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez",
];

/// Lowest sample salary (inclusive).
pub const SAMPLE_SALARY_MIN: i64 = 35_000;

/// Highest sample salary (inclusive).
pub const SAMPLE_SALARY_MAX: i64 = 85_000;

/// Generates `count` plausible payroll-style employees.
///
/// IDs run `EMP1000`, `EMP1001`, ...; names pair a random first and last
/// name; salaries are whole dollars in `[35000, 85000]`.
///
/// # Example
///
/// ```
/// use benefits_recon::roster::sample_roster;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let roster = sample_roster(3, &mut rng);
///
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster[2].employee_id, "EMP1002");
/// ```
pub fn sample_roster<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<EmployeeRecord> {
    (0..count)
        .map(|index| {
            let first = SAMPLE_FIRST_NAMES.choose(rng).copied().unwrap_or("John");
            let last = SAMPLE_LAST_NAMES.choose(rng).copied().unwrap_or("Smith");

            let mut employee = EmployeeRecord::new(
                SourceKind::Payroll.placeholder_id(index),
                format!("{} {}", first, last),
            );
            employee.salary = Some(Decimal::from(
                rng.gen_range(SAMPLE_SALARY_MIN..=SAMPLE_SALARY_MAX),
            ));
            employee
        })
        .collect()
}
