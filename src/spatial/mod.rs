pub mod grid;

pub use grid::SpatialGrid;
