use crate::normalize::Bounds;
use crate::types::{DatasetId, WeeklySampleSet};

/// Remembers the bounds of the most recently rendered dataset so that
/// repeated renders of the same week skip the full scan.
///
/// Keyed on [`WeeklySampleSet::id`]: a rebuilt week with identical samples
/// is a new dataset and is scanned again.
#[derive(Debug, Default)]
pub struct BoundsCache {
    entry: Option<(DatasetId, Option<Bounds>)>,
    recomputes: usize,
}

impl BoundsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds for `samples`, recomputed only when the dataset changed.
    pub fn get_or_compute(&mut self, samples: &WeeklySampleSet) -> Option<Bounds> {
        let id = samples.id();
        if let Some((cached_id, bounds)) = &self.entry {
            if *cached_id == id {
                return *bounds;
            }
        }

        let bounds = Bounds::compute(samples);
        self.recomputes += 1;
        log::debug!("Recomputed heatmap bounds for dataset {id}: {:?}", bounds);
        self.entry = Some((id, bounds));
        bounds
    }

    /// How many times the bounds were actually scanned.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(monday: &[f64]) -> WeeklySampleSet {
        let mut days: [Vec<f64>; 7] = Default::default();
        days[0] = monday.to_vec();
        WeeklySampleSet::new(days)
    }

    #[test]
    fn test_same_week_is_cached() {
        let mut cache = BoundsCache::new();
        let set = week(&[3.0, 9.0]);
        let a = cache.get_or_compute(&set);
        let b = cache.get_or_compute(&set.clone());
        assert_eq!(a, b);
        assert_eq!(cache.recomputes(), 1);
    }

    #[test]
    fn test_changed_week_recomputes() {
        let mut cache = BoundsCache::new();
        cache.get_or_compute(&week(&[3.0, 9.0]));
        let b = cache.get_or_compute(&week(&[3.0, 12.0])).unwrap();
        assert_eq!(b.max, 12.0);
        assert_eq!(cache.recomputes(), 2);
    }

    #[test]
    fn test_rebuilt_week_is_a_new_dataset() {
        let mut cache = BoundsCache::new();
        cache.get_or_compute(&week(&[1.0, 2.0]));
        cache.get_or_compute(&week(&[1.0, 2.0]));
        assert_eq!(cache.recomputes(), 2);
    }

    #[test]
    fn test_alternating_weeks_rescan() {
        let mut cache = BoundsCache::new();
        let a = week(&[5.0]);
        let b = week(&[7.0]);
        assert_eq!(cache.get_or_compute(&a).unwrap().max, 5.0);
        assert_eq!(cache.get_or_compute(&b).unwrap().max, 7.0);
        assert_eq!(cache.get_or_compute(&a).unwrap().max, 5.0);
        assert_eq!(cache.recomputes(), 3);
    }
}
