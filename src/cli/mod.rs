//! Command-line parsing for the resistor combinator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! search code. Numeric arguments are validated here by clap value parsers so
//! a bad invocation never reaches the searcher.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

/// Environment variable (or `.env` entry) supplying the default result count.
pub const MAX_RESULTS_ENV: &str = "RCT_MAX_RESULTS";

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "rct",
    version,
    about = "Resistor Combinator Tool: find the best pair of resistors for a ratio, resistance or divider voltage"
)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false).args(["rat", "res", "volt"])))]
pub struct Cli {
    /// Resistor list (one value per line) or a standard series: e12, e24, e48, e96.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Maximum results to print [default: $RCT_MAX_RESULTS, else 20].
    #[arg(value_name = "MAX_RESULTS", value_parser = parse_max_results)]
    pub max_results: Option<usize>,

    /// Best pair whose ratio r1/r2 is closest to RATIO.
    #[arg(long, value_name = "RATIO", value_parser = parse_non_zero, allow_negative_numbers = true)]
    pub rat: Option<f64>,

    /// Best series or parallel pair giving OHMS.
    #[arg(long, value_name = "OHMS", value_parser = parse_non_zero, allow_negative_numbers = true)]
    pub res: Option<f64>,

    /// Feedback divider producing VOLTS from a REF reference voltage.
    #[arg(
        long,
        num_args = 2,
        value_names = ["VOLTS", "REF"],
        value_parser = parse_non_zero,
        allow_negative_numbers = true
    )]
    pub volt: Option<Vec<f64>>,

    /// Export ranked results to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export ranked results to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Print a run summary above the results table.
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a finite, non-zero number.
pub fn parse_non_zero(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !v.is_finite() {
        return Err(format!("'{s}' is not a finite number"));
    }
    if v == 0.0 {
        return Err("argument of value 0 is not allowed".to_string());
    }
    Ok(v)
}

/// Parse a positive result count.
pub fn parse_max_results(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a positive integer"))?;
    if n == 0 {
        return Err("maximum results must be at least 1".to_string());
    }
    Ok(n)
}
