//! Core types and configuration

pub mod config;
pub mod tile;

// Re-export main types
pub use config::{EdgePolicy, GameConfig};
pub use tile::{Cell, TileType};
