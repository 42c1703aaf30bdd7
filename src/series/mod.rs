//! Standard resistor series and their decade expansion.
//!
//! A series only lists one decade of base values. Expanding it produces the
//! candidate pool the searcher works on: every base value times `10^0..=10^6`.

use log::debug;

use crate::domain::round_to;

pub mod tables;

/// Decade multipliers applied to every base value, with the decimals each
/// product is rounded to.
const DECADES: [(f64, u32); 7] = [
    (1.0, 2),
    (10.0, 1),
    (100.0, 0),
    (1_000.0, 0),
    (10_000.0, 0),
    (100_000.0, 0),
    (1_000_000.0, 0),
];

/// IEC 60063 preferred-value series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardSeries {
    E12,
    E24,
    E48,
    E96,
}

impl StandardSeries {
    pub const ALL: [StandardSeries; 4] = [
        StandardSeries::E12,
        StandardSeries::E24,
        StandardSeries::E48,
        StandardSeries::E96,
    ];

    pub fn base_values(self) -> &'static [f64] {
        match self {
            StandardSeries::E12 => &tables::E12,
            StandardSeries::E24 => &tables::E24,
            StandardSeries::E48 => &tables::E48,
            StandardSeries::E96 => &tables::E96,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StandardSeries::E12 => "E12",
            StandardSeries::E24 => "E24",
            StandardSeries::E48 => "E48",
            StandardSeries::E96 => "E96",
        }
    }

    /// Parse `e12`/`E24`/...; `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Expand a series into its full candidate list.
///
/// Output is grouped by base value, each group holding the seven decade
/// multiples in ascending order. No deduplication is performed.
pub fn expand(series: StandardSeries) -> Vec<f64> {
    let base = series.base_values();
    let mut out = Vec::with_capacity(base.len() * DECADES.len());
    for &r in base {
        for (scale, decimals) in DECADES {
            out.push(round_to(r * scale, decimals));
        }
    }
    debug!("expanded {} into {} candidate values", series.display_name(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_and_range() {
        assert_eq!(StandardSeries::E12.base_values().len(), 12);
        assert_eq!(StandardSeries::E24.base_values().len(), 24);
        assert_eq!(StandardSeries::E48.base_values().len(), 48);
        assert_eq!(StandardSeries::E96.base_values().len(), 96);

        for series in StandardSeries::ALL {
            let values = series.base_values();
            assert!(values.iter().all(|&v| (1.0..10.0).contains(&v)));
            assert!(values.windows(2).all(|w| w[0] < w[1]), "{series:?} not strictly increasing");
        }
    }

    #[test]
    fn e12_expansion_shape() {
        let values = expand(StandardSeries::E12);
        assert_eq!(values.len(), 84);
        assert_eq!(
            &values[..7],
            &[1.0, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0]
        );
    }

    #[test]
    fn expansion_rounds_decade_products() {
        let values = expand(StandardSeries::E12);
        // 4.7 is the ninth base value.
        let group = &values[8 * 7..9 * 7];
        assert_eq!(group, &[4.7, 47.0, 470.0, 4700.0, 47000.0, 470000.0, 4700000.0]);

        let values = expand(StandardSeries::E96);
        assert_eq!(values.len(), 672);
        // 1.02 -> 102 needs rounding (1.02 * 100 is not exact in binary).
        assert_eq!(&values[7..10], &[1.02, 10.2, 102.0]);
    }

    #[test]
    fn series_names_match_case_insensitively() {
        assert_eq!(StandardSeries::from_name("e24"), Some(StandardSeries::E24));
        assert_eq!(StandardSeries::from_name("E96"), Some(StandardSeries::E96));
        assert_eq!(StandardSeries::from_name(" e12 "), Some(StandardSeries::E12));
        assert_eq!(StandardSeries::from_name("e6"), None);
        assert_eq!(StandardSeries::from_name("resistors.txt"), None);
    }
}
