//! # boxcalc
//!
//! Command-line entry point for the position calculator.
//!
//! Reads a position CSV, computes the net and boxed position reports, and
//! prints them to stdout or writes them to files.
//!
//! # Usage
//!
//! ```bash
//! boxcalc positions.csv --log-level info
//! boxcalc positions.csv --format json --net-out net.json --boxed-out boxed.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use boxcalc_core::calc::{compute_boxed_positions, compute_net_positions};
use boxcalc_io::{csv, json};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

/// Net & Boxed Position Calculator.
#[derive(Parser)]
#[command(name = "boxcalc", about = "Net & Boxed Position Calculator")]
struct Cli {
    /// Input position file (CSV: Trader,Broker,Symbol,Quantity,Price).
    input: PathBuf,

    /// Report output format.
    #[arg(long, value_enum, default_value = "csv")]
    format: Format,

    /// Write the net position report here instead of stdout.
    #[arg(long)]
    net_out: Option<PathBuf>,

    /// Write the boxed position report here instead of stdout.
    #[arg(long)]
    boxed_out: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    boxcalc_core::logging::init_logging(&cli.log_level, cli.log_dir.as_deref(), "boxcalc");

    info!("boxcalc starting — input={}", cli.input.display());

    // 2. Parse the input file. Any malformed row aborts with a non-zero
    //    exit before the calculators run.
    let positions = csv::read_positions_file(&cli.input)
        .with_context(|| format!("failed to read positions from {}", cli.input.display()))?;
    info!("parsed {} position(s)", positions.len());

    // 3. Compute both reports.
    let mut net = compute_net_positions(&positions);
    let mut boxed = compute_boxed_positions(&positions);
    info!("computed {} net / {} boxed record(s)", net.len(), boxed.len());

    // The calculators make no ordering promise; sort for stable display.
    net.sort_by(|a, b| (&a.trader, &a.symbol).cmp(&(&b.trader, &b.symbol)));
    boxed.sort_by(|a, b| (&a.trader, &a.symbol).cmp(&(&b.trader, &b.symbol)));

    // 4. Render and emit.
    let (net_report, boxed_report) = match cli.format {
        Format::Csv => (csv::render_net_positions(&net), csv::render_boxed_positions(&boxed)),
        Format::Json => {
            (json::render_net_positions(&net)?, json::render_boxed_positions(&boxed)?)
        }
    };

    emit("Net Positions", &net_report, cli.net_out.as_deref())?;
    emit("Boxed Positions", &boxed_report, cli.boxed_out.as_deref())?;

    Ok(())
}

/// Write a report to a file, or print it under a heading when no output
/// path was given.
fn emit(heading: &str, report: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("{heading} written to {}", path.display());
        }
        None => {
            println!("{heading}:\n");
            println!("{report}");
        }
    }
    Ok(())
}
