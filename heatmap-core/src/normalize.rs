//! Sample normalization for heatmap cells.
//!
//! Each positive sample is mapped onto `[0, 1]` for ramp lookup, inverted so
//! that the busiest bucket lands on 0 and the quietest positive bucket on 1.
//! Non-positive samples are kept off the ramp entirely so that "no activity"
//! stays visually distinct from "very low activity".

use crate::types::WeeklySampleSet;
use serde::{Deserialize, Serialize};

/// Global extent of a weekly dataset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// `max(min, 1)`: the lower end of the ramp.
    pub floored_min: f64,
}

impl Bounds {
    /// Min and max over all samples of all seven days.
    /// Returns `None` when the week holds no samples at all.
    pub fn compute(samples: &WeeklySampleSet) -> Option<Bounds> {
        let mut iter = samples.samples();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Bounds {
            min,
            max,
            floored_min: min.max(1.0),
        })
    }
}

/// Normalized position of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "lowercase")]
pub enum CellLevel {
    /// Zero or negative sample: render with the background color.
    Empty,
    /// Ramp position. Within `[0, 1]` for samples in `[floored_min, max]`;
    /// samples below `floored_min` land above 1 and are clamped by the ramp.
    Level(f64),
}

/// Map one sample to its ramp position.
pub fn normalize(value: f64, bounds: &Bounds) -> CellLevel {
    if value <= 0.0 {
        return CellLevel::Empty;
    }
    // Every positive sample sits on the floor: saturate.
    if bounds.max == 1.0 {
        return CellLevel::Level(1.0);
    }
    // Flat week above the floor: zero-width range, saturate instead of 0/0.
    if bounds.max == bounds.floored_min {
        return CellLevel::Level(1.0);
    }
    CellLevel::Level(1.0 - (value - bounds.floored_min) / (bounds.max - bounds.floored_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(cell: CellLevel) -> f64 {
        match cell {
            CellLevel::Level(t) => t,
            CellLevel::Empty => panic!("expected a ramp level, got Empty"),
        }
    }

    fn week(days: [&[f64]; 7]) -> WeeklySampleSet {
        WeeklySampleSet::new(days.map(|d| d.to_vec()))
    }

    fn sample_week() -> WeeklySampleSet {
        week([
            &[43.0, 189.0, 231.0, 230.0, 232.0, 227.0],
            &[43.0, 188.0, 231.0, 228.0, 232.0, 227.0],
            &[43.0, 188.0, 231.0, 228.0, 233.0, 228.0],
            &[43.0, 190.0, 231.0, 229.0, 234.0, 228.0],
            &[43.0, 190.0, 232.0, 233.0, 233.0, 223.0],
            &[62.0, 131.0, 196.0, 192.0, 199.0, 206.0],
            &[65.0, 102.0, 179.0, 190.0, 187.0, 211.0],
        ])
    }

    #[test]
    fn test_bounds_span_whole_week() {
        let b = Bounds::compute(&sample_week()).unwrap();
        assert_eq!(b.min, 43.0);
        assert_eq!(b.max, 234.0);
        assert_eq!(b.floored_min, 43.0);
    }

    #[test]
    fn test_bounds_floor_min_at_one() {
        let b = Bounds::compute(&week([&[0.0, 5.0], &[], &[], &[], &[], &[], &[3.0]])).unwrap();
        assert_eq!(b.min, 0.0);
        assert_eq!(b.floored_min, 1.0);
        assert_eq!(b.max, 5.0);
    }

    #[test]
    fn test_bounds_empty_week() {
        assert!(Bounds::compute(&WeeklySampleSet::default()).is_none());
    }

    #[test]
    fn test_extremes_are_inverted() {
        let b = Bounds::compute(&sample_week()).unwrap();
        assert_eq!(normalize(234.0, &b), CellLevel::Level(0.0));
        assert_eq!(normalize(43.0, &b), CellLevel::Level(1.0));
    }

    #[test]
    fn test_monotonic_inversion() {
        let set = sample_week();
        let b = Bounds::compute(&set).unwrap();
        let mut values: Vec<f64> = set.samples().collect();
        values.sort_by(f64::total_cmp);
        for pair in values.windows(2) {
            let lo = level(normalize(pair[0], &b));
            let hi = level(normalize(pair[1], &b));
            assert!(hi <= lo, "normalize({}) = {hi} > normalize({}) = {lo}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_non_positive_is_empty() {
        let b = Bounds { min: -4.0, max: 10.0, floored_min: 1.0 };
        assert_eq!(normalize(0.0, &b), CellLevel::Empty);
        assert_eq!(normalize(-3.0, &b), CellLevel::Empty);
        let b = Bounds { min: 0.0, max: 1.0, floored_min: 1.0 };
        assert_eq!(normalize(0.0, &b), CellLevel::Empty);
    }

    #[test]
    fn test_max_one_saturates() {
        let b = Bounds::compute(&week([&[0.0, 1.0], &[0.0], &[], &[], &[], &[], &[]])).unwrap();
        assert_eq!(b.max, 1.0);
        assert_eq!(normalize(1.0, &b), CellLevel::Level(1.0));
    }

    #[test]
    fn test_flat_week_saturates() {
        let b = Bounds::compute(&week([&[7.0], &[7.0], &[7.0], &[7.0], &[7.0], &[7.0], &[7.0]])).unwrap();
        assert_eq!(normalize(7.0, &b), CellLevel::Level(1.0));
        assert!(!level(normalize(7.0, &b)).is_nan());
    }

    #[test]
    fn test_below_floor_exceeds_one() {
        let b = Bounds { min: 0.0, max: 11.0, floored_min: 1.0 };
        let t = level(normalize(0.5, &b));
        assert!(t > 1.0, "fractional sample below the floor should land above 1, got {t}");
    }
}
