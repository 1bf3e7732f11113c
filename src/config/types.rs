//! Configuration types for reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every `Default` impl
//! matches the shipped `config/default` directory.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::DEFAULT_TIME_SAVED;

/// Payroll/carrier comparison thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComparisonConfig {
    /// Largest payroll/carrier difference that is not reported.
    pub tolerance: Decimal,
    /// Mismatches strictly above this are High priority, the rest Medium.
    pub high_mismatch_threshold: Decimal,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            tolerance: Decimal::new(500, 2),
            high_mismatch_threshold: Decimal::new(5000, 2),
        }
    }
}

/// Limits for synthetic supplementation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupplementConfig {
    /// Target findings per roster employee.
    pub discrepancies_per_employee: usize,
    /// Hard ceiling on the target.
    pub max_discrepancies: usize,
}

impl Default for SupplementConfig {
    fn default() -> Self {
        Self {
            discrepancies_per_employee: 2,
            max_discrepancies: 50,
        }
    }
}

/// Synthetic roster settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FallbackConfig {
    /// Number of sample employees generated when no source yields a roster.
    pub roster_size: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { roster_size: 15 }
    }
}

/// Report presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Display string placed in `time_saved`.
    pub time_saved: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            time_saved: DEFAULT_TIME_SAVED.to_string(),
        }
    }
}

/// Contents of `reconcile.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReconcileFile {
    /// Comparison thresholds.
    pub comparison: ComparisonConfig,
    /// Supplementation limits.
    pub supplement: SupplementConfig,
    /// Fallback roster settings.
    pub fallback: FallbackConfig,
    /// Report settings.
    pub report: ReportConfig,
}

/// Ordered keyword tables used to classify columns.
///
/// A column belongs to a category when its lower-cased name contains any of
/// the category's keywords.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordTables {
    /// Identity columns in every source.
    pub identity: Vec<String>,
    /// Extra identity keywords for carrier rows only.
    pub carrier_identity: Vec<String>,
    /// Identity columns preferred over the rest (SSN-like).
    pub preferred_identity: Vec<String>,
    /// Name columns.
    pub name: Vec<String>,
    /// Payroll pay-amount columns.
    pub pay_amount: Vec<String>,
    /// Payroll deduction line-item columns recorded on the roster.
    pub deduction_items: Vec<String>,
    /// Payroll columns summed into the deduction total during comparison.
    pub deduction_total: Vec<String>,
    /// Carrier premium columns.
    pub carrier_premium: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            identity: words(&["ssn", "social", "security", "id", "emp", "employee", "number"]),
            carrier_identity: words(&["member"]),
            preferred_identity: words(&["ssn", "social", "security"]),
            name: words(&["name", "first", "last", "full"]),
            pay_amount: words(&["salary", "wage", "pay", "gross", "amount"]),
            deduction_items: words(&["deduction", "benefit", "insurance", "premium"]),
            deduction_total: words(&["deduction", "medical", "premium", "benefit"]),
            carrier_premium: words(&["premium", "amount", "cost", "rate"]),
        }
    }
}

/// Contents of `keywords.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordsFile {
    /// The keyword tables.
    pub keywords: KeywordTables,
}

/// The complete reconciliation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconConfig {
    /// Comparison thresholds.
    pub comparison: ComparisonConfig,
    /// Supplementation limits.
    pub supplement: SupplementConfig,
    /// Fallback roster settings.
    pub fallback: FallbackConfig,
    /// Report settings.
    pub report: ReportConfig,
    /// Column keyword tables.
    pub keywords: KeywordTables,
}

impl ReconConfig {
    /// Creates a configuration from its component files.
    pub fn new(reconcile: ReconcileFile, keywords: KeywordTables) -> Self {
        Self {
            comparison: reconcile.comparison,
            supplement: reconcile.supplement,
            fallback: reconcile.fallback,
            report: reconcile.report,
            keywords,
        }
    }

    /// The number of findings a run aims for given its roster size.
    ///
    /// # Example
    ///
    /// ```
    /// use benefits_recon::config::ReconConfig;
    ///
    /// let config = ReconConfig::default();
    /// assert_eq!(config.discrepancy_target(7), 14);
    /// assert_eq!(config.discrepancy_target(40), 50);
    /// ```
    pub fn discrepancy_target(&self, employee_count: usize) -> usize {
        employee_count
            .saturating_mul(self.supplement.discrepancies_per_employee)
            .min(self.supplement.max_discrepancies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = ReconConfig::default();
        assert_eq!(config.comparison.tolerance, Decimal::from(5));
        assert_eq!(config.comparison.high_mismatch_threshold, Decimal::from(50));
        assert_eq!(config.fallback.roster_size, 15);
        assert_eq!(config.report.time_saved, "3.75 hrs");
    }

    #[test]
    fn test_discrepancy_target_caps_at_max() {
        let config = ReconConfig::default();
        assert_eq!(config.discrepancy_target(0), 0);
        assert_eq!(config.discrepancy_target(1), 2);
        assert_eq!(config.discrepancy_target(25), 50);
        assert_eq!(config.discrepancy_target(1000), 50);
    }

    #[test]
    fn test_carrier_identity_extends_identity() {
        let keywords = KeywordTables::default();
        assert_eq!(keywords.carrier_identity, vec!["member"]);
        assert!(!keywords.identity.contains(&"member".to_string()));
    }

    #[test]
    fn test_deserialize_reconcile_file() {
        let yaml = r#"
comparison:
  tolerance: "2.50"
  high_mismatch_threshold: "75"
supplement:
  discrepancies_per_employee: 3
  max_discrepancies: 10
fallback:
  roster_size: 4
report:
  time_saved: "1 hr"
"#;
        let file: ReconcileFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.comparison.tolerance, Decimal::new(250, 2));
        assert_eq!(file.supplement.max_discrepancies, 10);
        assert_eq!(file.fallback.roster_size, 4);
        assert_eq!(file.report.time_saved, "1 hr");
    }
}
