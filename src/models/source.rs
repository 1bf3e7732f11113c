//! Source file kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three upload slots the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Payroll register export.
    Payroll,
    /// Benefits-administration platform export.
    #[serde(rename = "benadmin")]
    BenAdmin,
    /// Insurance carrier billing export.
    Carrier,
}

impl SourceKind {
    /// All source kinds in roster contribution order.
    pub const ALL: [SourceKind; 3] = [
        SourceKind::Payroll,
        SourceKind::BenAdmin,
        SourceKind::Carrier,
    ];

    /// The slot label used in diagnostics and upload forms.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Payroll => "payroll",
            SourceKind::BenAdmin => "benadmin",
            SourceKind::Carrier => "carrier",
        }
    }

    /// The base number for placeholder employee IDs minted from this source.
    ///
    /// # Example
    ///
    /// ```
    /// use benefits_recon::models::SourceKind;
    ///
    /// assert_eq!(SourceKind::Carrier.id_offset(), 3000);
    /// assert_eq!(SourceKind::Carrier.placeholder_id(4), "EMP3004");
    /// ```
    pub fn id_offset(&self) -> usize {
        match self {
            SourceKind::Payroll => 1000,
            SourceKind::BenAdmin => 2000,
            SourceKind::Carrier => 3000,
        }
    }

    /// Placeholder employee ID for the row at `index` (zero-based).
    pub fn placeholder_id(&self, index: usize) -> String {
        placeholder_id(self.id_offset() + index)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats a sequential placeholder ID (`EMP` followed by at least four digits).
pub fn placeholder_id(number: usize) -> String {
    format!("EMP{:04}", number)
}
