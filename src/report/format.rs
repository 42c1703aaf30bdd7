//! Presentation rows and formatted terminal output.
//!
//! We keep formatting code in one place so the search code stays free of
//! string handling and output changes are localized.

use serde::Serialize;

use crate::domain::{CandidateSet, Configuration, Mode, ScoredRecord, Target};
use crate::report::notation::format_resistance;

/// One result line with resistor columns already in shorthand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub value: f64,
    pub error: f64,
    pub r1: String,
    pub r2: String,
    pub configuration: Option<Configuration>,
}

/// Ranked results for one mode, ready for printing or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub mode: Mode,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_records(mode: Mode, records: &[ScoredRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| ResultRow {
                value: r.value,
                error: r.error,
                r1: format_resistance(r.r1),
                r2: format_resistance(r.r2),
                configuration: r.configuration,
            })
            .collect();
        Self { mode, rows }
    }

    /// Column names for this table's mode.
    pub fn headers(&self) -> &'static [&'static str] {
        headers(self.mode)
    }
}

pub fn headers(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::Ratio => &["ratio", "error", "Rt", "Rb"],
        Mode::Resistance => &["R", "error", "R1", "R2", "config"],
        Mode::Voltage => &["V", "error", "Rt", "Rb"],
    }
}

/// Tab-separated results table (header + one line per row).
pub fn format_table(table: &ResultTable) -> String {
    let precision = table.mode.precision() as usize;
    let mut out = String::new();

    out.push_str(&table.headers().join("\t"));
    out.push('\n');

    for row in &table.rows {
        out.push_str(&format!(
            "{:.precision$}\t{:.precision$}\t{}\t{}",
            row.value, row.error, row.r1, row.r2
        ));
        if let Some(configuration) = row.configuration {
            out.push('\t');
            out.push_str(configuration.as_str());
        }
        out.push('\n');
    }

    out
}

/// Short header block describing what was searched.
pub fn format_run_summary(candidates: &CandidateSet, target: &Target, evaluated: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Candidates: {} ({} values)\n",
        candidates.origin(),
        candidates.len()
    ));
    match *target {
        Target::Ratio { goal } => out.push_str(&format!("Goal: ratio {goal}\n")),
        Target::Resistance { goal } => {
            out.push_str(&format!("Goal: resistance {} ohm\n", format_resistance(goal)))
        }
        Target::Voltage { goal, reference } => {
            out.push_str(&format!("Goal: {goal} V (reference {reference} V)\n"))
        }
    }
    out.push_str(&format!("Evaluated: {evaluated} combinations\n"));

    out
}
