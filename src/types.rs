use heatmap_core::{CellLevel, Weekday};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapCell {
    /// Raw sample, shown as the cell's tooltip.
    pub value: f64,
    pub level: CellLevel,
    /// Background fill, `#rrggbb`.
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub day: Weekday,
    pub label: &'static str,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HeatmapGrid {
    pub rows: Vec<HeatmapRow>,
}

impl HeatmapGrid {
    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }
}
