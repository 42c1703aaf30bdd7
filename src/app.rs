//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - runs the search pipeline
//! - prints the results table and writes optional exports

use std::env::{self, VarError};

use clap::Parser;
use log::info;

use crate::cli::{Cli, MAX_RESULTS_ENV, parse_max_results};
use crate::domain::{DEFAULT_MAX_RESULTS, RunConfig, Target};
use crate::error::AppError;
use crate::io::CandidateSource;

pub mod pipeline;

/// Entry point for the `rct` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_max_results = match env::var(MAX_RESULTS_ENV) {
        Ok(raw) => Some(raw),
        Err(VarError::NotPresent) => None,
        Err(e) => {
            return Err(AppError::configuration(format!("Invalid {MAX_RESULTS_ENV}: {e}")));
        }
    };
    let config = run_config_from_args(&cli, env_max_results.as_deref())?;
    let run = pipeline::run_search(&config)?;

    if config.show_summary {
        println!(
            "{}",
            crate::report::format_run_summary(&run.candidates, &config.target, run.evaluated)
        );
    }
    print!("{}", crate::report::format_table(&run.table));

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_results_csv(path, &run.table)?;
        info!("wrote {} rows to '{}'", run.table.rows.len(), path.display());
    }
    if let Some(path) = &config.export_json {
        crate::io::export::write_results_json(path, &run.table)?;
        info!("wrote {} rows to '{}'", run.table.rows.len(), path.display());
    }

    Ok(())
}

/// Build the run configuration from parsed arguments.
///
/// `env_max_results` is the raw `RCT_MAX_RESULTS` value, consulted only when
/// no `MAX_RESULTS` positional was given.
pub fn run_config_from_args(cli: &Cli, env_max_results: Option<&str>) -> Result<RunConfig, AppError> {
    Ok(RunConfig {
        source: CandidateSource::resolve(&cli.source),
        target: target_from_args(cli)?,
        max_results: resolve_max_results(cli.max_results, env_max_results)?,
        export_csv: cli.export.clone(),
        export_json: cli.export_json.clone(),
        show_summary: cli.summary,
    })
}

fn target_from_args(cli: &Cli) -> Result<Target, AppError> {
    match (cli.rat, cli.res, cli.volt.as_deref()) {
        (Some(goal), None, None) => Ok(Target::Ratio { goal }),
        (None, Some(goal), None) => Ok(Target::Resistance { goal }),
        (None, None, Some(&[goal, reference])) => Ok(Target::Voltage { goal, reference }),
        (None, None, Some(_)) => Err(AppError::configuration(
            "--volt expects exactly two values: VOLTS REF",
        )),
        (None, None, None) => Err(AppError::configuration("mode not selected")),
        _ => Err(AppError::configuration("multiple modes selected")),
    }
}

fn resolve_max_results(arg: Option<usize>, env_value: Option<&str>) -> Result<usize, AppError> {
    if let Some(n) = arg {
        return Ok(n);
    }
    match env_value {
        Some(raw) => parse_max_results(raw)
            .map_err(|e| AppError::configuration(format!("Invalid {MAX_RESULTS_ENV}: {e}"))),
        None => Ok(DEFAULT_MAX_RESULTS),
    }
}

/// Default filter is `warn`; each `-v` raises it one level. `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init()
        .ok();
}
