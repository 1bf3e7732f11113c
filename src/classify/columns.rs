//! Keyword-based column classification.
//!
//! Source layouts are unknown in advance, so every field is located by
//! substring-matching lower-cased column names against the ordered keyword
//! tables in [`KeywordTables`]. Column order breaks ties: the first matching
//! column wins unless a method says otherwise.

use rust_decimal::Decimal;

use crate::config::KeywordTables;
use crate::models::{Deduction, RawRow, SourceKind};

use super::numeric::parse_amount;

/// Returns true if `column` contains any of `keywords`.
///
/// # Example
///
/// ```
/// use benefits_recon::classify::matches_keyword;
///
/// let keywords = vec!["premium".to_string(), "cost".to_string()];
/// assert!(matches_keyword("monthly_premium", &keywords));
/// assert!(!matches_keyword("coverage_tier", &keywords));
/// ```
pub fn matches_keyword(column: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| column.contains(keyword.as_str()))
}

/// Locates identity, name and amount columns in source rows.
#[derive(Debug, Clone, Copy)]
pub struct ColumnClassifier<'k> {
    keywords: &'k KeywordTables,
}

impl<'k> ColumnClassifier<'k> {
    /// Creates a classifier over the given keyword tables.
    pub fn new(keywords: &'k KeywordTables) -> Self {
        Self { keywords }
    }

    /// Columns matching `keywords`, in row order.
    fn matching<'r>(&self, row: &'r RawRow, keywords: &[String]) -> Vec<&'r str> {
        row.columns()
            .filter(|column| matches_keyword(column, keywords))
            .collect()
    }

    /// Identity candidate columns for a row from `source`, in row order.
    ///
    /// Carrier rows also accept the carrier-only identity keywords.
    pub fn identity_columns<'r>(&self, row: &'r RawRow, source: SourceKind) -> Vec<&'r str> {
        row.columns()
            .filter(|column| {
                matches_keyword(column, &self.keywords.identity)
                    || (source == SourceKind::Carrier
                        && matches_keyword(column, &self.keywords.carrier_identity))
            })
            .collect()
    }

    /// The identity column to use: the first SSN-like candidate if there is
    /// one, otherwise the first candidate.
    pub fn identity_column<'r>(&self, row: &'r RawRow, source: SourceKind) -> Option<&'r str> {
        let candidates = self.identity_columns(row, source);
        candidates
            .iter()
            .find(|column| matches_keyword(column, &self.keywords.preferred_identity))
            .or_else(|| candidates.first())
            .copied()
    }

    /// The employee ID for the row at `index` (zero-based).
    ///
    /// Falls back to the source's placeholder when there is no identity
    /// column or the chosen column is blank.
    pub fn employee_id(&self, row: &RawRow, source: SourceKind, index: usize) -> String {
        self.identity_column(row, source)
            .and_then(|column| row.get(column))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| source.placeholder_id(index))
    }

    /// Name candidate columns, in row order.
    pub fn name_columns<'r>(&self, row: &'r RawRow) -> Vec<&'r str> {
        self.matching(row, &self.keywords.name)
    }

    /// The display name for the row at `index` (zero-based).
    ///
    /// Two or more name columns are read as first and last name and joined.
    /// A single column is used as-is. Otherwise `Employee {index + 1}`.
    pub fn employee_name(&self, row: &RawRow, index: usize) -> String {
        let placeholder = || format!("Employee {}", index + 1);

        match self.name_columns(row).as_slice() {
            [first, last, ..] => {
                let first = row.get(first).unwrap_or_default();
                let last = row.get(last).unwrap_or_default();
                format!("{} {}", first, last).trim().to_string()
            }
            [single] => row
                .get(single)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or_else(placeholder),
            [] => placeholder(),
        }
    }

    /// The payroll pay amount from the first pay column.
    ///
    /// `None` when the row has no pay column; a blank or non-numeric value
    /// counts as zero.
    pub fn pay_amount(&self, row: &RawRow) -> Option<Decimal> {
        self.matching(row, &self.keywords.pay_amount)
            .first()
            .map(|column| row.get(column).and_then(parse_amount).unwrap_or(Decimal::ZERO))
    }

    /// Positive payroll deduction line items, labelled by column.
    pub fn deduction_items(&self, row: &RawRow) -> Vec<Deduction> {
        self.matching(row, &self.keywords.deduction_items)
            .into_iter()
            .filter_map(|column| {
                let amount = row.get(column).and_then(parse_amount)?;
                (amount > Decimal::ZERO).then(|| Deduction {
                    label: column.to_string(),
                    amount,
                })
            })
            .collect()
    }

    /// Sum of every numeric deduction-total column, when that sum is positive.
    ///
    /// A sum that overflows counts as no total.
    pub fn deduction_total(&self, row: &RawRow) -> Option<Decimal> {
        let total = self
            .matching(row, &self.keywords.deduction_total)
            .into_iter()
            .filter_map(|column| row.get(column).and_then(parse_amount))
            .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(amount))?;

        (total > Decimal::ZERO).then_some(total)
    }

    /// The first numeric carrier premium column value.
    pub fn carrier_premium(&self, row: &RawRow) -> Option<Decimal> {
        self.matching(row, &self.keywords.carrier_premium)
            .into_iter()
            .find_map(|column| row.get(column).and_then(parse_amount))
    }
}
