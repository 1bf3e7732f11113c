//! Lenient numeric coercion for cell values.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a cell as a decimal amount.
///
/// Accepts plain (`"120.50"`, `"-3"`) and scientific (`"1.2e3"`) notation.
/// Returns `None` for blanks and anything non-numeric; coercion failures are
/// never errors.
///
/// # Example
///
/// ```
/// use benefits_recon::classify::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 120.50 "), Some(Decimal::new(12050, 2)));
/// assert_eq!(parse_amount("1.2e3"), Some(Decimal::from(1200)));
/// assert_eq!(parse_amount("$120"), None);
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}
