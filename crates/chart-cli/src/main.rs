//! swr-chart: render a multi-page amateur-radio band plan chart with a
//! measured VSWR curve overlaid from antenna-analyzer sweep files.

mod pdf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_types::{MegaHertz, Ohms};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "swr-chart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the three-page band plan PDF
    Render {
        /// Directory containing .asd sweep files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output PDF path
        #[arg(short, long, default_value = "canadian_band_plan.pdf")]
        output: PathBuf,
    },

    /// Print the best measured VSWR in each band
    Summary {
        /// Directory containing .asd sweep files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Parse and validate a single .asd sweep file
    ParseAsd {
        /// Path to the .asd file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Render { dir, output } => render_chart(&dir, &output)?,
        Commands::Summary { dir } => print_summary(&dir)?,
        Commands::ParseAsd { file } => parse_asd(&file)?,
    }

    Ok(())
}

/// Load every sweep in `dir` and compute the shared VSWR curve.
fn load_curve(dir: &Path) -> Result<lib_types::VswrCurve> {
    let samples = lib_asd::load_sweep_dir(dir)
        .with_context(|| format!("Failed to load sweep files from {:?}", dir))?;

    let curve = lib_rf::build_curve(&samples, Ohms::Z0_50);

    if let Some((lo, hi)) = curve.frequency_range() {
        tracing::info!("VSWR curve: {} points, {} to {}", curve.len(), lo, hi);
    } else {
        tracing::info!("VSWR curve is empty; rendering band plan without a trace");
    }

    Ok(curve)
}

fn render_chart(dir: &Path, output: &Path) -> Result<()> {
    let violations = lib_plan::validate();
    for v in &violations {
        tracing::warn!("Catalog violation: {}", v);
    }

    let curve = load_curve(dir)?;
    let pages = lib_plan::compose_pages(&curve);

    pdf::render_document(&pages, output)?;

    println!("Wrote {:?}", output);
    Ok(())
}

fn print_summary(dir: &Path) -> Result<()> {
    let curve = load_curve(dir)?;

    println!("Best measured VSWR per band:");
    for band in lib_plan::DETAIL_BANDS {
        let (lo, hi) = band.domain;
        match curve.minimum_in(MegaHertz(lo), MegaHertz(hi)) {
            Some(best) => println!(
                "  {:>6}  {:.2} at {:.4} MHz",
                band.name, best.vswr, best.frequency.0
            ),
            None => println!("  {:>6}  no sweep data", band.name),
        }
    }

    Ok(())
}

fn parse_asd(file: &Path) -> Result<()> {
    tracing::info!("Parsing sweep file: {:?}", file);

    let samples = lib_asd::parse_asd_file(file)
        .with_context(|| format!("Failed to parse {:?}", file))?;

    println!("Sweep file: {:?}", file);
    println!("  Samples: {}", samples.len());

    let lo = samples.iter().map(|s| s.frequency.0).fold(f64::INFINITY, f64::min);
    let hi = samples
        .iter()
        .map(|s| s.frequency.0)
        .fold(f64::NEG_INFINITY, f64::max);
    if lo.is_finite() {
        println!("  Frequency range: {:.4} MHz - {:.4} MHz", lo, hi);

        let curve = lib_rf::build_curve(&samples, Ohms::Z0_50);
        if let Some(best) = curve.minimum_in(MegaHertz(lo), MegaHertz(hi)) {
            println!(
                "  Best VSWR: {:.2} at {:.4} MHz",
                best.vswr, best.frequency.0
            );
        }
    }

    Ok(())
}
