//! The reconciliation entry point.

use std::io::{Read, Seek};
use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ReconConfig;
use crate::ingest::read_rows;
use crate::models::{ReconciliationReport, SourceData, SourceKind};
use crate::reconcile::reconcile;
use crate::report::assemble_report;
use crate::roster::{build_roster, sample_roster};

use super::SourceFiles;

/// Runs reconciliations against a fixed configuration.
///
/// Holds no per-run state, so one instance can serve many runs and be
/// shared across threads.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use benefits_recon::pipeline::{Reconciler, SourceFiles};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let payroll = Cursor::new(b"employee_id,name,salary\nE1,Ada Lovelace,52000\n".to_vec());
/// let files = SourceFiles::new().with_payroll(payroll);
///
/// let report = Reconciler::default()
///     .process_with_rng(files, &mut StdRng::seed_from_u64(1));
///
/// assert_eq!(report.total_employees, 1);
/// assert_eq!(report.errors_found, 2);
/// assert_eq!(report.files_processed, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconConfig,
}

impl Reconciler {
    /// Creates a reconciler with the given configuration.
    pub fn new(config: ReconConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    /// Runs a reconciliation seeded from system entropy.
    pub fn process<R: Read + Seek>(&self, files: SourceFiles<R>) -> ReconciliationReport {
        self.process_with_rng(files, &mut StdRng::from_entropy())
    }

    /// Runs a reconciliation drawing all randomness from `rng`.
    ///
    /// The same inputs and the same seed produce the same report.
    pub fn process_with_rng<R: Read + Seek, G: Rng + ?Sized>(
        &self,
        files: SourceFiles<R>,
        rng: &mut G,
    ) -> ReconciliationReport {
        let run_id = Uuid::new_v4();
        let start_time = Instant::now();

        let data = read_sources(files);
        let files_processed = data.files_processed();
        debug!(
            run_id = %run_id,
            payroll = data.payroll.len(),
            benadmin = data.benadmin.len(),
            carrier = data.carrier.len(),
            "Sources read"
        );

        let mut roster = build_roster(&data, &self.config.keywords);
        if roster.is_empty() {
            debug!(
                run_id = %run_id,
                employees = self.config.fallback.roster_size,
                "No employees found; using sample roster"
            );
            roster = sample_roster(self.config.fallback.roster_size, rng);
        }

        let discrepancies = reconcile(&data, &roster, &self.config, rng);
        let report = assemble_report(
            roster.len(),
            discrepancies,
            files_processed,
            &self.config.report,
        );

        info!(
            run_id = %run_id,
            employees = report.total_employees,
            discrepancies = report.errors_found,
            files_processed = report.files_processed,
            duration_us = start_time.elapsed().as_micros(),
            "Reconciliation completed"
        );

        report
    }
}

fn read_sources<R: Read + Seek>(files: SourceFiles<R>) -> SourceData {
    let read = |stream: Option<R>, source: SourceKind| {
        stream
            .map(|mut stream| read_rows(&mut stream, source))
            .unwrap_or_default()
    };

    SourceData::new(
        read(files.payroll, SourceKind::Payroll),
        read(files.benadmin, SourceKind::BenAdmin),
        read(files.carrier, SourceKind::Carrier),
    )
}
