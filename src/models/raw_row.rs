//! Raw tabular row model.
//!
//! A [`RawRow`] is one data line of an uploaded file, keyed by its
//! normalised header names. Column order follows the header.

use serde::Serialize;

/// One row of a source file: normalised column name to trimmed value.
///
/// Column names are trimmed and lower-cased; values are trimmed. The
/// insertion order of columns is preserved because several heuristics
/// (first matching column, first column as lookup key) depend on it.
///
/// # Example
///
/// ```
/// use benefits_recon::models::RawRow;
///
/// let row = RawRow::from_pairs([(" SSN ", " 123-45-6789 "), ("First Name", "Ada")]);
/// assert_eq!(row.get("ssn"), Some("123-45-6789"));
/// assert_eq!(row.columns().collect::<Vec<_>>(), vec!["ssn", "first name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from header/value pairs, normalising both.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut row = Self::new();
        for (column, value) in pairs {
            row.insert(column.as_ref(), value.as_ref());
        }
        row
    }

    /// Inserts a cell, normalising the column name and value.
    ///
    /// A repeated column keeps its original position and takes the new value.
    pub fn insert(&mut self, column: &str, value: &str) {
        let column = column.trim().to_lowercase();
        let value = value.trim().to_string();

        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Returns the value of a column, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Returns `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the value of the first column, if any.
    pub fn first_value(&self) -> Option<&str> {
        self.cells.first().map(|(_, value)| value.as_str())
    }

    /// Returns the number of columns present in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_normalises_columns_and_values() {
        let row = RawRow::from_pairs([("  Employee ID ", " E-17 "), ("GROSS_PAY", "1200.50 ")]);

        assert_eq!(row.get("employee id"), Some("E-17"));
        assert_eq!(row.get("gross_pay"), Some("1200.50"));
        assert_eq!(row.get("GROSS_PAY"), None);
    }

    #[test]
    fn test_column_order_is_preserved() {
        let row = RawRow::from_pairs([("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["zeta", "alpha", "mid"]);
        assert_eq!(row.first_value(), Some("1"));
    }

    #[test]
    fn test_repeated_column_keeps_position_takes_last_value() {
        let row = RawRow::from_pairs([("id", "1"), ("name", "Ada"), ("ID", "2")]);

        assert_eq!(row.len(), 2);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(row.get("id"), Some("2"));
    }

    #[test]
    fn test_empty_row() {
        let row = RawRow::new();
        assert!(row.is_empty());
        assert_eq!(row.first_value(), None);
        assert_eq!(row.iter().count(), 0);
    }
}
