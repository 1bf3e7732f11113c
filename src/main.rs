//! Command-line front end for the benefits reconciliation engine.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use benefits_recon::config::{ConfigLoader, ReconConfig};
use benefits_recon::models::ReportMetadata;
use benefits_recon::pipeline::{MINIMUM_SOURCES, Reconciler, SourceFiles, ensure_minimum_sources};

/// Reconcile payroll, benefits administration and carrier exports
#[derive(Parser)]
#[command(name = "benefits-recon")]
#[command(about = "Find discrepancies between payroll deductions and carrier premiums")]
struct Args {
    /// Payroll export (CSV)
    #[arg(long)]
    payroll: Option<PathBuf>,

    /// Benefits administration export (CSV)
    #[arg(long)]
    benadmin: Option<PathBuf>,

    /// Carrier billing statement (CSV)
    #[arg(long)]
    carrier: Option<PathBuf>,

    /// Directory holding reconcile.yaml and keywords.yaml (default: built-in values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Employer group name shown on the report
    #[arg(long, default_value = "Demo Group")]
    group_name: String,

    /// Billing period shown on the report
    #[arg(long, default_value = "2025-07")]
    period: String,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn open(path: Option<&Path>) -> Result<Option<File>> {
    path.map(|path| {
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))
    })
    .transpose()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let files = SourceFiles {
        payroll: open(args.payroll.as_deref())?,
        benadmin: open(args.benadmin.as_deref())?,
        carrier: open(args.carrier.as_deref())?,
    };
    ensure_minimum_sources(&files, MINIMUM_SOURCES)?;

    let config = match &args.config {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("Failed to load configuration from {}", dir.display()))?
            .into_config(),
        None => ReconConfig::default(),
    };
    let reconciler = Reconciler::new(config);

    let report = match args.seed {
        Some(seed) => reconciler.process_with_rng(files, &mut StdRng::seed_from_u64(seed)),
        None => reconciler.process(files),
    };

    let annotated = report.annotate(ReportMetadata {
        group_name: args.group_name,
        period: args.period,
    });

    let json = if args.pretty {
        serde_json::to_string_pretty(&annotated)?
    } else {
        serde_json::to_string(&annotated)?
    };
    println!("{}", json);

    Ok(())
}
