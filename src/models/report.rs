//! Report models for the reconciliation engine.
//!
//! [`ReconciliationReport`] is what the engine returns. [`AnnotatedReport`]
//! is what a caller builds on top of it once it has attached its own
//! [`ReportMetadata`]; the engine itself never sees that metadata.

use serde::{Deserialize, Serialize};

use super::DiscrepancyRecord;

/// Display string for time saved; the engine does not measure it.
pub const DEFAULT_TIME_SAVED: &str = "3.75 hrs";

/// The terminal output of one reconciliation run.
///
/// # Example
///
/// ```
/// use benefits_recon::models::ReconciliationReport;
///
/// let report = ReconciliationReport {
///     total_employees: 4,
///     errors_found: 0,
///     error_rate: 0,
///     time_saved: "3.75 hrs".to_string(),
///     files_processed: 2,
///     discrepancies: vec![],
/// };
/// let json = serde_json::to_value(&report).unwrap();
/// assert_eq!(json["errors"], serde_json::json!([]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Size of the roster the findings were drawn against.
    pub total_employees: usize,
    /// Number of findings.
    pub errors_found: usize,
    /// `errors_found / total_employees` as a rounded percentage.
    pub error_rate: u64,
    /// Fixed display string for time saved.
    pub time_saved: String,
    /// Number of sources that yielded at least one row.
    pub files_processed: usize,
    /// Every finding, Phase A first.
    #[serde(rename = "errors")]
    pub discrepancies: Vec<DiscrepancyRecord>,
}

impl ReconciliationReport {
    /// Attaches caller-supplied metadata.
    pub fn annotate(self, metadata: ReportMetadata) -> AnnotatedReport {
        AnnotatedReport {
            metadata,
            report: self,
        }
    }
}

/// Caller-supplied labels for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Employer group the files belong to.
    pub group_name: String,
    /// Billing period label, e.g. `2025-07`.
    pub period: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            group_name: "Demo Group".to_string(),
            period: "2025-07".to_string(),
        }
    }
}

/// A report with caller metadata flattened alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedReport {
    /// Caller labels.
    #[serde(flatten)]
    pub metadata: ReportMetadata,
    /// The engine's report.
    #[serde(flatten)]
    pub report: ReconciliationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> ReconciliationReport {
        ReconciliationReport {
            total_employees: 15,
            errors_found: 0,
            error_rate: 0,
            time_saved: DEFAULT_TIME_SAVED.to_string(),
            files_processed: 0,
            discrepancies: vec![],
        }
    }

    #[test]
    fn test_default_metadata() {
        let metadata = ReportMetadata::default();
        assert_eq!(metadata.group_name, "Demo Group");
        assert_eq!(metadata.period, "2025-07");
    }

    #[test]
    fn test_annotated_report_flattens_fields() {
        let annotated = empty_report().annotate(ReportMetadata {
            group_name: "Acme Corp".to_string(),
            period: "2025-08".to_string(),
        });

        let value = serde_json::to_value(&annotated).unwrap();
        assert_eq!(value["group_name"], "Acme Corp");
        assert_eq!(value["period"], "2025-08");
        assert_eq!(value["total_employees"], 15);
        assert_eq!(value["time_saved"], "3.75 hrs");
        assert!(value.get("metadata").is_none());
        assert!(value.get("report").is_none());
    }
}
