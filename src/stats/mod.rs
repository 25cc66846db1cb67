pub mod aggregate;
pub mod exec;
pub mod grid;
pub mod render;

pub use aggregate::{aggregate, Aggregation, SkippedRepo};
pub use exec::exec;
pub use grid::build_grid;
pub use render::HeatmapRenderer;
