//! Modulo Bias Checker CLI
//!
//! Reads bytes from standard input, counts byte values and checks
//! the distribution for a modulo bias.

use clap::Parser;
use modulobias::{Analyzer, AnalyzerConfig, FileConfig};
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Checks a byte stream for modulo bias.
#[derive(Debug, Parser)]
#[command(name = "modulobias", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of bytes to read from standard input.
    #[arg(long)]
    dataset: Option<usize>,

    /// Absolute deviation from uniform that flags a byte as biased.
    #[arg(long)]
    threshold: Option<f64>,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => match FileConfig::from_file(&path) {
            Ok(file) => file.analyzer,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return ExitCode::from(1);
            }
        },
        None => AnalyzerConfig::default(),
    };

    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }

    if let Err(e) = config.validate() {
        eprintln!("ERROR: {}", e);
        return ExitCode::from(1);
    }

    info!(
        dataset = config.dataset,
        threshold = config.threshold,
        "modulobias v{}",
        modulobias::VERSION
    );

    let stdin = std::io::stdin();
    let analyzer = Analyzer::new(config);

    match analyzer.run(BufReader::new(stdin.lock())) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::from(report.exit_code() as u8)
        }
        Err(e) => {
            // Zero bytes is an incomplete sample for any positive cap
            eprintln!("ERROR: {}", e);
            ExitCode::from(2)
        }
    }
}
