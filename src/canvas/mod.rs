pub mod colors;
pub mod heatmap_renderer;
