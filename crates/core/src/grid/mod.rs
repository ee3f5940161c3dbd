//! City board and fire propagation

pub mod city_grid;
pub mod propagation;

// Re-export main types
pub use city_grid::{CityGrid, PlacementError};
