pub mod canvas;
pub mod types;

pub use canvas::colors::cell_color;
pub use canvas::heatmap_renderer::render_grid;
pub use types::{HeatmapCell, HeatmapGrid, HeatmapRow};

pub use heatmap_core;
pub use mapstyle_lib;
