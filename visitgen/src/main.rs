use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use visitgen::{GeneratorConfig, croix_schema, run};

/// `EX_USAGE` from sysexits.h.
const EX_USAGE: u8 = 64;

#[derive(Parser)]
#[command(name = "visitgen", version)]
#[command(about = "Generate the Expr.h and Stmt.h visitor hierarchies")]
struct Cli {
    /// Existing directory the headers are written into
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io) = e.print() {
                tracing::error!("Failed to print usage: {}", io);
            }
            return ExitCode::from(parse_error_status(&e));
        }
    };

    match generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate(cli: &Cli) -> Result<()> {
    let epoch = std::env::var("SOURCE_DATE_EPOCH").ok();
    let date = banner_date(epoch.as_deref())?;
    let config = GeneratorConfig::builder(&cli.output_dir).date(date).build();

    let schema = croix_schema().context("compiled-in schema is malformed")?;
    let report = run(&schema, &config)
        .with_context(|| format!("generation into '{}' failed", cli.output_dir.display()))?;

    tracing::info!(
        "Generated {} headers ({} warnings)",
        report.written.len(),
        report.warnings.len()
    );
    Ok(())
}

/// Exit status for a rejected command line: `EX_USAGE` for real usage
/// errors, 0 for `--help` and `--version`.
fn parse_error_status(e: &clap::Error) -> u8 {
    if e.use_stderr() { EX_USAGE } else { 0 }
}

/// Resolves the banner date: `SOURCE_DATE_EPOCH` when set, else today.
fn banner_date(epoch: Option<&str>) -> Result<NaiveDate> {
    let Some(epoch) = epoch else {
        return Ok(Local::now().date_naive());
    };

    let secs: i64 = epoch
        .trim()
        .parse()
        .with_context(|| format!("invalid SOURCE_DATE_EPOCH '{}'", epoch))?;
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.date_naive())
        .with_context(|| format!("SOURCE_DATE_EPOCH '{}' is out of range", epoch))
}
