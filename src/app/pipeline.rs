//! Shared search pipeline.
//!
//! candidate load -> pairwise search -> ranking -> presentation rows
//!
//! Keeping this in one place lets `app::run` focus on printing and exports,
//! and lets tests drive the whole flow without spawning the binary.

use crate::domain::{CandidateSet, RunConfig, ScoredRecord};
use crate::error::AppError;
use crate::io::load_candidates;
use crate::report::ResultTable;
use crate::search::{rank, search};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub candidates: CandidateSet,
    /// Number of records the search produced before ranking.
    pub evaluated: usize,
    pub ranked: Vec<ScoredRecord>,
    pub table: ResultTable,
}

/// Load candidates per config and run the search.
pub fn run_search(config: &RunConfig) -> Result<RunOutput, AppError> {
    let candidates = load_candidates(&config.source)?;
    run_search_with_candidates(config, candidates)
}

/// Run the search over an already-built candidate set.
pub fn run_search_with_candidates(config: &RunConfig, candidates: CandidateSet) -> Result<RunOutput, AppError> {
    let records = search(&candidates, &config.target)?;
    let evaluated = records.len();

    let ranked = rank(records, config.max_results);
    let table = ResultTable::from_records(config.target.mode(), &ranked);

    Ok(RunOutput {
        candidates,
        evaluated,
        ranked,
        table,
    })
}
