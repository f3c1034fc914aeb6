use crate::canvas::colors::cell_color;
use crate::types::{HeatmapCell, HeatmapGrid, HeatmapRow};
use heatmap_core::{normalize, BoundsCache, CellLevel, Ramp, WeeklySampleSet};

/// Lay out one week as rows of colored cells, Monday first.
///
/// Bounds come from `cache`, so rendering the same week again (e.g. with the
/// other ramp) does not rescan the samples.
pub fn render_grid(samples: &WeeklySampleSet, ramp: Ramp, cache: &mut BoundsCache) -> HeatmapGrid {
    if samples.is_empty() {
        log::warn!("Rendering heatmap for a week without samples");
    }
    let bounds = cache.get_or_compute(samples);

    let rows = samples
        .iter()
        .map(|(day, values)| HeatmapRow {
            day,
            label: day.abbrev(),
            cells: values
                .iter()
                .map(|&value| {
                    let level = bounds.map_or(CellLevel::Empty, |b| normalize(value, &b));
                    HeatmapCell {
                        value,
                        level,
                        color: cell_color(level, ramp),
                    }
                })
                .collect(),
        })
        .collect();

    HeatmapGrid { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap_core::{Weekday, EMPTY_CELL_COLOR};

    fn week() -> WeeklySampleSet {
        WeeklySampleSet::new([
            vec![0.0, 10.0, 20.0],
            vec![5.0, 0.0, 20.0],
            vec![1.0, 1.0, 1.0],
            vec![],
            vec![20.0],
            vec![0.0],
            vec![2.0, 4.0],
        ])
    }

    #[test]
    fn test_grid_shape_follows_days() {
        let grid = render_grid(&week(), Ramp::Main, &mut BoundsCache::new());
        assert_eq!(grid.rows.len(), 7);
        assert_eq!(grid.rows[0].day, Weekday::Monday);
        assert_eq!(grid.rows[6].label, "Su");
        assert_eq!(grid.rows[3].cells.len(), 0);
        assert_eq!(grid.width(), 3);
    }

    #[test]
    fn test_zero_cells_are_background() {
        let grid = render_grid(&week(), Ramp::Alt, &mut BoundsCache::new());
        let monday = &grid.rows[0].cells;
        assert_eq!(monday[0].level, CellLevel::Empty);
        assert_eq!(monday[0].color, EMPTY_CELL_COLOR);
        assert_ne!(monday[1].color, EMPTY_CELL_COLOR);
    }

    #[test]
    fn test_busiest_cell_is_ramp_start() {
        let grid = render_grid(&week(), Ramp::Main, &mut BoundsCache::new());
        let peak = &grid.rows[4].cells[0];
        assert_eq!(peak.level, CellLevel::Level(0.0));
        assert_eq!(peak.color, Ramp::Main.sample(0.0).to_hex());
    }

    #[test]
    fn test_switching_ramp_reuses_bounds() {
        let set = week();
        let mut cache = BoundsCache::new();
        let main = render_grid(&set, Ramp::Main, &mut cache);
        let alt = render_grid(&set, Ramp::Alt, &mut cache);
        assert_eq!(cache.recomputes(), 1);
        assert_eq!(main.rows[1].cells[0].level, alt.rows[1].cells[0].level);
    }

    #[test]
    fn test_week_without_samples_renders_empty_rows() {
        let empty = WeeklySampleSet::new(Default::default());
        let grid = render_grid(&empty, Ramp::Main, &mut BoundsCache::new());
        assert_eq!(grid.rows.len(), 7);
        assert_eq!(grid.width(), 0);
    }
}
