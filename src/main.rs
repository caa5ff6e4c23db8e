//! CLI entry point for the conversion rater tool.
//!
//! Provides subcommands for scoring a single conversion rate and for
//! scoring every row of a partner rate CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use conversion_rater::input::read_rate_records;
use conversion_rater::output::{append_record, print_json};
use conversion_rater::records::ScoredRecord;
use conversion_rater::scoring::rates::ScoreRates;
use conversion_rater::scoring::summary::summarize;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "conversion_rater")]
#[command(about = "A tool to score partner conversion rates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single conversion rate
    Score {
        /// Conversion rate to score
        #[arg(value_name = "RATE")]
        rate: f64,

        /// JSON file with tier cutoffs (falls back to SCORE_RATES_PATH, then defaults)
        #[arg(short = 'r', long)]
        rates: Option<String>,

        /// Log the full scored record as JSON instead of just the tier
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Score every row of a partner rate CSV
    ScoreFile {
        /// CSV file with partner_id,conversion_rate rows
        #[arg(value_name = "FILE")]
        input: String,

        /// CSV file to append scored rows to
        #[arg(short, long, default_value = "scores.csv")]
        output: String,

        /// JSON file with tier cutoffs (falls back to SCORE_RATES_PATH, then defaults)
        #[arg(short = 'r', long)]
        rates: Option<String>,

        /// Log a tier-distribution summary after scoring
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/conversion_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("conversion_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { rate, rates, json } => {
            let rates = load_rates(rates.as_deref())?;
            let record = ScoredRecord::from_rate(rate, &rates);

            if json {
                print_json(&record)?;
            } else {
                info!(rate, score = %record.score, "Rate scored");
            }
        }
        Commands::ScoreFile {
            input,
            output,
            rates,
            summary,
        } => {
            let rates = load_rates(rates.as_deref())?;
            score_file(&input, &output, &rates, summary)?;
        }
    }

    Ok(())
}

/// Resolves tier cutoffs from a CLI path, the `SCORE_RATES_PATH` env var,
/// or the compiled-in defaults, in that order.
fn load_rates(path: Option<&str>) -> Result<ScoreRates> {
    match path {
        Some(p) => ScoreRates::load(p),
        None => match std::env::var("SCORE_RATES_PATH") {
            Ok(p) => ScoreRates::load(&p),
            Err(_) => Ok(ScoreRates::default()),
        },
    }
}

/// Scores every row of `input`, appending scored rows to `output` and
/// optionally logging the tier distribution of the batch.
#[tracing::instrument(skip(rates))]
fn score_file(input: &str, output: &str, rates: &ScoreRates, with_summary: bool) -> Result<()> {
    let rows = read_rate_records(input)?;
    info!(rows = rows.len(), "Rate rows loaded");

    let mut scored = Vec::with_capacity(rows.len());
    for row in &rows {
        let record =
            ScoredRecord::from_rate(row.conversion_rate, rates).with_partner(&row.partner_id);

        if let Err(e) = append_record(output, &record) {
            error!(partner_id = %row.partner_id, error = %e, "Failed to write scored row");
            continue;
        }
        scored.push(record);
    }

    if with_summary {
        let report = summarize(&scored);
        info!("{}", serde_json::to_string_pretty(&report)?);
    }

    info!(scored = scored.len(), output, "Scoring complete");
    Ok(())
}
