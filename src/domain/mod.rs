//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the run goal (`Mode`, `Target`) and its precision policy
//! - the candidate pool (`CandidateSet`)
//! - search outputs (`ScoredRecord`, `Configuration`)

pub mod types;

pub use types::*;
