//! Ranking of scored records.
//!
//! Records are ordered by error first. Ties are broken by the remaining fields
//! (value, `r1`, `r2`, configuration) so the output never depends on the
//! order in which pairs were enumerated.

use std::cmp::Ordering;

use crate::domain::ScoredRecord;

/// Total order used for ranking.
pub fn compare_records(a: &ScoredRecord, b: &ScoredRecord) -> Ordering {
    a.error
        .total_cmp(&b.error)
        .then_with(|| a.value.total_cmp(&b.value))
        .then_with(|| a.r1.total_cmp(&b.r1))
        .then_with(|| a.r2.total_cmp(&b.r2))
        .then_with(|| a.configuration.cmp(&b.configuration))
}

/// Sort by error ascending and keep at most `max_results` records.
pub fn rank(mut records: Vec<ScoredRecord>, max_results: usize) -> Vec<ScoredRecord> {
    records.sort_by(compare_records);
    records.truncate(max_results);
    records
}
