//! The rows read from each source for a single run.

use super::{RawRow, SourceKind};

/// Rows read from each of the three sources.
///
/// Built once per run and passed by reference to every stage; nothing in
/// the engine mutates it after construction. A source that was absent or
/// unreadable has no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceData {
    /// Payroll rows.
    pub payroll: Vec<RawRow>,
    /// Benefits-administration rows.
    pub benadmin: Vec<RawRow>,
    /// Carrier billing rows.
    pub carrier: Vec<RawRow>,
}

impl SourceData {
    /// Creates a context from the three row lists.
    pub fn new(payroll: Vec<RawRow>, benadmin: Vec<RawRow>, carrier: Vec<RawRow>) -> Self {
        Self {
            payroll,
            benadmin,
            carrier,
        }
    }

    /// Rows for one source.
    pub fn rows(&self, source: SourceKind) -> &[RawRow] {
        match source {
            SourceKind::Payroll => &self.payroll,
            SourceKind::BenAdmin => &self.benadmin,
            SourceKind::Carrier => &self.carrier,
        }
    }

    /// Returns true if the source yielded at least one row.
    pub fn has_rows(&self, source: SourceKind) -> bool {
        !self.rows(source).is_empty()
    }

    /// Number of sources that yielded at least one row.
    ///
    /// # Example
    ///
    /// ```
    /// use benefits_recon::models::{RawRow, SourceData};
    ///
    /// let data = SourceData::new(vec![RawRow::from_pairs([("ssn", "1")])], vec![], vec![]);
    /// assert_eq!(data.files_processed(), 1);
    /// ```
    pub fn files_processed(&self) -> usize {
        SourceKind::ALL
            .iter()
            .filter(|source| self.has_rows(**source))
            .count()
    }
}
