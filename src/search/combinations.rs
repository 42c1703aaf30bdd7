//! Exhaustive pairwise search over a candidate set.
//!
//! Given:
//! - a candidate list of resistor values
//! - a target (mode + goal, plus a reference voltage in voltage mode)
//!
//! we evaluate every pair the mode considers, compute the mode's metric and
//! its distance from the goal, and return one `ScoredRecord` per evaluation.
//! There is no pruning: even a full E96 expansion stays in the hundreds of
//! thousands of evaluations.

use log::info;

use crate::domain::{CandidateSet, Configuration, Mode, ScoredRecord, Target, round_to};
use crate::error::AppError;

/// Number of records `search` produces for `n` candidates.
pub fn pair_count(n: usize, mode: Mode) -> usize {
    match mode {
        Mode::Ratio | Mode::Voltage => n * n,
        // n(n+1)/2 unordered pairs, two configurations each.
        Mode::Resistance => n * (n + 1),
    }
}

/// Evaluate every pair the target's mode considers.
pub fn search(candidates: &CandidateSet, target: &Target) -> Result<Vec<ScoredRecord>, AppError> {
    let values = candidates.values();
    validate_candidates(values)?;
    validate_target(target)?;

    let mode = target.mode();
    info!(
        "searching {} pairs ({} mode, {} candidates)",
        pair_count(values.len(), mode),
        mode.display_name(),
        values.len()
    );

    match *target {
        Target::Ratio { goal } => search_ratio(values, goal),
        Target::Resistance { goal } => search_resistance(values, goal),
        Target::Voltage { goal, reference } => search_voltage(values, goal, reference),
    }
}

fn search_ratio(values: &[f64], goal: f64) -> Result<Vec<ScoredRecord>, AppError> {
    let precision = Mode::Ratio.precision();
    let mut out = Vec::with_capacity(pair_count(values.len(), Mode::Ratio));
    for &r1 in values {
        for &r2 in values {
            let ratio = r1 / r2;
            out.push(score(ratio, goal, precision, r1, r2, None)?);
        }
    }
    Ok(out)
}

fn search_resistance(values: &[f64], goal: f64) -> Result<Vec<ScoredRecord>, AppError> {
    let precision = Mode::Resistance.precision();
    let mut out = Vec::with_capacity(pair_count(values.len(), Mode::Resistance));
    for (i, &r1) in values.iter().enumerate() {
        // j >= i: each unordered pair once, self-pairs included.
        for &r2 in &values[i..] {
            let series = r1 + r2;
            out.push(score(series, goal, precision, r1, r2, Some(Configuration::Series))?);

            let parallel = (r1 * r2) / (r1 + r2);
            out.push(score(parallel, goal, precision, r1, r2, Some(Configuration::Parallel))?);
        }
    }
    Ok(out)
}

fn search_voltage(values: &[f64], goal: f64, reference: f64) -> Result<Vec<ScoredRecord>, AppError> {
    let precision = Mode::Voltage.precision();
    let mut out = Vec::with_capacity(pair_count(values.len(), Mode::Voltage));
    for &r1 in values {
        for &r2 in values {
            let ratio = r2 / (r1 + r2);
            let volt = reference / ratio;
            out.push(score(volt, goal, precision, r1, r2, None)?);
        }
    }
    Ok(out)
}

fn score(
    value: f64,
    goal: f64,
    precision: u32,
    r1: f64,
    r2: f64,
    configuration: Option<Configuration>,
) -> Result<ScoredRecord, AppError> {
    if !value.is_finite() {
        return Err(AppError::domain(format!(
            "Non-finite result {value} for resistor pair ({r1}, {r2})."
        )));
    }
    Ok(ScoredRecord {
        error: round_to((value - goal).abs(), precision),
        value: round_to(value, precision),
        r1,
        r2,
        configuration,
    })
}

fn validate_candidates(values: &[f64]) -> Result<(), AppError> {
    if values.is_empty() {
        return Err(AppError::domain("Candidate list is empty."));
    }
    if let Some((idx, v)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.is_finite() && **v > 0.0))
    {
        return Err(AppError::domain(format!(
            "Candidate #{} has value {v}; resistor values must be finite and > 0.",
            idx + 1
        )));
    }
    Ok(())
}

fn validate_target(target: &Target) -> Result<(), AppError> {
    let goal = target.goal();
    if !(goal.is_finite() && goal != 0.0) {
        return Err(AppError::domain(format!("Goal must be finite and non-zero (got {goal}).")));
    }
    if let Some(reference) = target.reference() {
        if !(reference.is_finite() && reference != 0.0) {
            return Err(AppError::domain(format!(
                "Reference voltage must be finite and non-zero (got {reference})."
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn set(values: &[f64]) -> CandidateSet {
        CandidateSet::from_values(values.to_vec())
    }

    #[test]
    fn ratio_enumerates_cartesian_product() {
        let records = search(&set(&[1000.0, 2000.0]), &Target::Ratio { goal: 2.0 }).unwrap();
        assert_eq!(records.len(), 4);

        let pairs: Vec<(f64, f64)> = records.iter().map(|r| (r.r1, r.r2)).collect();
        assert_eq!(
            pairs,
            vec![(1000.0, 1000.0), (1000.0, 2000.0), (2000.0, 1000.0), (2000.0, 2000.0)]
        );

        let exact = records.iter().find(|r| r.r1 == 2000.0 && r.r2 == 1000.0).unwrap();
        assert_eq!(exact.value, 2.0);
        assert_eq!(exact.error, 0.0);
        assert!(records.iter().all(|r| r.configuration.is_none()));
    }

    #[test]
    fn ratio_error_matches_rounded_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<f64> = (0..25).map(|_| rng.gen_range(1.0..1_000_000.0)).collect();
        let goal = 3.3;
        let records = search(&set(&values), &Target::Ratio { goal }).unwrap();
        assert_eq!(records.len(), 625);
        for r in &records {
            assert_eq!(r.error, round_to((r.r1 / r.r2 - goal).abs(), 3));
            assert_eq!(r.value, round_to(r.r1 / r.r2, 3));
        }
    }

    #[test]
    fn resistance_pairs_are_unordered_with_self_pairs() {
        let records = search(&set(&[100.0, 200.0, 300.0]), &Target::Resistance { goal: 150.0 }).unwrap();
        // 6 unordered pairs (including self-pairs), two configurations each.
        assert_eq!(records.len(), 12);
        assert!(records.iter().all(|r| r.r1 <= r.r2));

        let par_100_300 = records
            .iter()
            .find(|r| r.r1 == 100.0 && r.r2 == 300.0 && r.configuration == Some(Configuration::Parallel))
            .unwrap();
        assert_eq!(par_100_300.value, 75.0);
        assert_eq!(par_100_300.error, 75.0);

        let par_100_200 = records
            .iter()
            .find(|r| r.r1 == 100.0 && r.r2 == 200.0 && r.configuration == Some(Configuration::Parallel))
            .unwrap();
        assert_eq!(par_100_200.value, 66.67);
        assert_eq!(par_100_200.error, 83.33);

        let self_pair = records
            .iter()
            .find(|r| r.r1 == 300.0 && r.r2 == 300.0 && r.configuration == Some(Configuration::Parallel))
            .unwrap();
        assert_eq!(self_pair.value, 150.0);
        assert_eq!(self_pair.error, 0.0);
    }

    #[test]
    fn resistance_duplicates_are_kept() {
        let records = search(&set(&[100.0, 100.0]), &Target::Resistance { goal: 200.0 }).unwrap();
        assert_eq!(records.len(), pair_count(2, Mode::Resistance));
        let exact_series = records
            .iter()
            .filter(|r| r.configuration == Some(Configuration::Series) && r.error == 0.0)
            .count();
        assert_eq!(exact_series, 3);
    }

    #[test]
    fn voltage_uses_lower_leg_as_feedback() {
        let target = Target::Voltage { goal: 5.0, reference: 1.25 };
        let records = search(&set(&[1000.0, 4000.0]), &target).unwrap();
        assert_eq!(records.len(), 4);

        // ratio = 4000 / 5000 = 0.8, V = 1.25 / 0.8 = 1.5625, err = 3.4375
        let r = records.iter().find(|r| r.r1 == 1000.0 && r.r2 == 4000.0).unwrap();
        assert_eq!(r.value, 1.56);
        assert_eq!(r.error, 3.44);

        // ratio = 1000 / 5000 = 0.2, V = 6.25, err = 1.25
        let r = records.iter().find(|r| r.r1 == 4000.0 && r.r2 == 1000.0).unwrap();
        assert_eq!(r.value, 6.25);
        assert_eq!(r.error, 1.25);
    }

    #[test]
    fn rejects_empty_and_non_positive_candidates() {
        let err = search(&set(&[]), &Target::Ratio { goal: 1.0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = search(&set(&[100.0, 0.0]), &Target::Ratio { goal: 1.0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = search(&set(&[-10.0]), &Target::Resistance { goal: 1.0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = search(&set(&[f64::NAN]), &Target::Resistance { goal: 1.0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn rejects_zero_goal_and_reference() {
        let err = search(&set(&[100.0]), &Target::Ratio { goal: 0.0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = search(&set(&[100.0]), &Target::Voltage { goal: 3.3, reference: 0.0 }).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn pair_counts() {
        assert_eq!(pair_count(672, Mode::Ratio), 451_584);
        assert_eq!(pair_count(3, Mode::Resistance), 12);
        assert_eq!(pair_count(0, Mode::Voltage), 0);
    }
}
