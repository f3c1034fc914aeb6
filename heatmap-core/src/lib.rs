pub mod cache;
pub mod normalize;
pub mod ramp;
pub mod types;

pub use cache::BoundsCache;
pub use normalize::{normalize, Bounds, CellLevel};
pub use ramp::{Ramp, Rgb, EMPTY_CELL_COLOR};
pub use types::{DatasetId, Weekday, WeeklySampleSet};
