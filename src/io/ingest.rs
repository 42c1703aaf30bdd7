//! Candidate list ingest.
//!
//! Turns the `SOURCE` argument into a `CandidateSet`:
//! - a standard series name (`e12`, `e24`, `e48`, `e96`) expands the series
//! - anything else is read as a text file with one value per line
//!
//! File rules:
//! - surrounding whitespace is ignored; blank lines and `#` comments are skipped
//! - values are plain numbers (`4700`, `4.7e3`) or shorthand (`4K7`, `2R2`, `R47`)
//! - every value must be finite and > 0; the first bad line aborts the load

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::domain::CandidateSet;
use crate::error::AppError;
use crate::report::notation::parse_resistance;
use crate::series::StandardSeries;

/// Where candidate values come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    Series(StandardSeries),
    File(PathBuf),
}

impl CandidateSource {
    /// Series names win over file paths, so a file literally named `e24`
    /// must be passed as `./e24`.
    pub fn resolve(arg: &str) -> Self {
        match StandardSeries::from_name(arg) {
            Some(series) => CandidateSource::Series(series),
            None => CandidateSource::File(PathBuf::from(arg)),
        }
    }
}

/// Build the candidate set for a run.
pub fn load_candidates(source: &CandidateSource) -> Result<CandidateSet, AppError> {
    match source {
        CandidateSource::Series(series) => {
            let set = CandidateSet::from_series(*series);
            info!("using {} series: {} candidate values", series.display_name(), set.len());
            Ok(set)
        }
        CandidateSource::File(path) => {
            let values = read_candidate_file(path)?;
            info!("read {} candidate values from '{}'", values.len(), path.display());
            Ok(CandidateSet::from_file_values(path.clone(), values))
        }
    }
}

/// Read and validate a candidate file.
pub fn read_candidate_file(path: &Path) -> Result<Vec<f64>, AppError> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::input_source(format!("Failed to read resistor list '{}': {e}", path.display()))
    })?;

    let values = parse_candidates(&text)
        .map_err(|e| AppError::input_source(format!("{}: {e}", path.display())))?;

    if values.is_empty() {
        return Err(AppError::input_source(format!(
            "Resistor list '{}' contains no values.",
            path.display()
        )));
    }
    Ok(values)
}

/// Parse candidate values from text, one per line.
///
/// Errors are plain messages carrying the 1-based line number; the caller adds
/// the file context.
pub fn parse_candidates(text: &str) -> Result<Vec<f64>, String> {
    let mut values = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_start_matches('\u{feff}').trim();

        if line.is_empty() || line.starts_with('#') {
            debug!("skipping line {line_no}");
            continue;
        }

        let value = parse_resistance(line).ok_or_else(|| format!("line {line_no}: invalid resistor value '{line}'"))?;
        if !(value.is_finite() && value > 0.0) {
            return Err(format!(
                "line {line_no}: resistor value must be finite and > 0 (got '{line}')"
            ));
        }
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateOrigin;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn parses_numbers_shorthand_and_skips_noise() {
        let text = "\u{feff}100\n\n# preferred stock\n 4K7 \n2.2\n1e3\n1M\n";
        let values = parse_candidates(text).unwrap();
        assert_eq!(values, vec![100.0, 4700.0, 2.2, 1000.0, 1_000_000.0]);
    }

    #[test]
    fn bom_followed_by_whitespace_is_skipped() {
        let values = parse_candidates("\u{feff} 100\n200\n").unwrap();
        assert_eq!(values, vec![100.0, 200.0]);

        let values = parse_candidates("\u{feff}\t# header\n4K7\n").unwrap();
        assert_eq!(values, vec![4700.0]);
    }

    #[test]
    fn shorthand_values_are_exact() {
        let values = parse_candidates("8M2\n4K02\nR47\n").unwrap();
        assert_eq!(values, vec![8_200_000.0, 4020.0, 0.47]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let values = parse_candidates("330\n100\n330\n").unwrap();
        assert_eq!(values, vec![330.0, 100.0, 330.0]);
    }

    #[test]
    fn reports_line_of_invalid_value() {
        let err = parse_candidates("100\n200\nten\n").unwrap_err();
        assert!(err.contains("line 3"), "{err}");

        let err = parse_candidates("100\n0\n").unwrap_err();
        assert!(err.contains("line 2"), "{err}");

        let err = parse_candidates("-47\n").unwrap_err();
        assert!(err.contains("line 1"), "{err}");

        assert!(parse_candidates("inf\n").is_err());
    }

    #[test]
    fn resolve_prefers_series_names() {
        assert_eq!(CandidateSource::resolve("E48"), CandidateSource::Series(StandardSeries::E48));
        assert_eq!(
            CandidateSource::resolve("./e24"),
            CandidateSource::File(PathBuf::from("./e24"))
        );
    }

    #[test]
    fn loads_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1000\n2000").unwrap();

        let source = CandidateSource::File(file.path().to_path_buf());
        let set = load_candidates(&source).unwrap();
        assert_eq!(set.values(), &[1000.0, 2000.0]);
        assert_eq!(set.origin(), &CandidateOrigin::File(file.path().to_path_buf()));
    }

    #[test]
    fn loads_series_source() {
        let set = load_candidates(&CandidateSource::Series(StandardSeries::E24)).unwrap();
        assert_eq!(set.len(), 24 * 7);
    }

    #[test]
    fn missing_and_empty_files_are_input_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = CandidateSource::File(dir.path().join("nope.txt"));
        let err = load_candidates(&missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputSource);

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "\n# nothing here\n").unwrap();
        let err = load_candidates(&CandidateSource::File(empty)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputSource);
        assert!(err.to_string().contains("no values"));
    }

    #[test]
    fn bad_line_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "100\n0\n").unwrap();
        let err = load_candidates(&CandidateSource::File(path)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputSource);
        assert!(err.to_string().contains("line 2"));
    }
}
