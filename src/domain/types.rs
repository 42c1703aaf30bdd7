//! Shared domain types.
//!
//! These types are intentionally small and value-like so they can be:
//!
//! - produced by the searcher and moved through the ranker without copies
//! - turned into presentation rows and exported to CSV/JSON

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::series::StandardSeries;

/// Number of results kept when neither argv nor the environment says otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Which electrical goal a run optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Ratio,
    Resistance,
    Voltage,
}

impl Mode {
    /// Decimal places used when storing a record's value and error.
    ///
    /// Ratios get one extra digit: with a dense series many ratios land within
    /// a hundredth of each other and would otherwise tie.
    pub fn precision(self) -> u32 {
        match self {
            Mode::Ratio => 3,
            Mode::Resistance | Mode::Voltage => 2,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Ratio => "ratio",
            Mode::Resistance => "resistance",
            Mode::Voltage => "voltage",
        }
    }
}

/// The selected mode together with its numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Ratio { goal: f64 },
    Resistance { goal: f64 },
    /// `reference` is the feedback voltage across the lower leg (`r2`).
    Voltage { goal: f64, reference: f64 },
}

impl Target {
    pub fn mode(&self) -> Mode {
        match self {
            Target::Ratio { .. } => Mode::Ratio,
            Target::Resistance { .. } => Mode::Resistance,
            Target::Voltage { .. } => Mode::Voltage,
        }
    }

    pub fn goal(&self) -> f64 {
        match *self {
            Target::Ratio { goal } | Target::Resistance { goal } | Target::Voltage { goal, .. } => goal,
        }
    }

    pub fn reference(&self) -> Option<f64> {
        match *self {
            Target::Voltage { reference, .. } => Some(reference),
            _ => None,
        }
    }
}

/// How two resistors are joined in resistance mode.
///
/// Variants are declared in name order so the derived `Ord` sorts
/// `parallel` before `series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Configuration {
    Parallel,
    Series,
}

impl Configuration {
    pub fn as_str(self) -> &'static str {
        match self {
            Configuration::Parallel => "parallel",
            Configuration::Series => "series",
        }
    }
}

/// One evaluated resistor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord {
    /// `|value - goal|`, rounded to the mode's precision.
    pub error: f64,
    /// Ratio, resistance or voltage produced by the pair, rounded likewise.
    pub value: f64,
    /// Numerator (ratio), first leg (resistance) or upper leg (voltage).
    pub r1: f64,
    /// Denominator (ratio), second leg (resistance) or lower leg (voltage).
    pub r2: f64,
    /// Only set in resistance mode.
    pub configuration: Option<Configuration>,
}

/// Where a candidate set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
    File(PathBuf),
    Series(StandardSeries),
    /// Built directly from values (library use and tests).
    Inline,
}

impl std::fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateOrigin::File(path) => write!(f, "{}", path.display()),
            CandidateOrigin::Series(series) => write!(f, "{}", series.display_name()),
            CandidateOrigin::Inline => write!(f, "<inline>"),
        }
    }
}

/// The pool of resistor values a run may combine.
///
/// Built once and never mutated. Order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    values: Vec<f64>,
    origin: CandidateOrigin,
}

impl CandidateSet {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            values,
            origin: CandidateOrigin::Inline,
        }
    }

    pub fn from_file_values(path: PathBuf, values: Vec<f64>) -> Self {
        Self {
            values,
            origin: CandidateOrigin::File(path),
        }
    }

    pub fn from_series(series: StandardSeries) -> Self {
        Self {
            values: crate::series::expand(series),
            origin: CandidateOrigin::Series(series),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn origin(&self) -> &CandidateOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// Derived from CLI arguments plus environment defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: crate::io::CandidateSource,
    pub target: Target,
    pub max_results: usize,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
    /// Print the run summary block above the results table.
    pub show_summary: bool,
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
