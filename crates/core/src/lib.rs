//! Firebreak Core Library
//!
//! Game logic for a grid-based firefighting arcade game: a city board of
//! grass, house, and water blocks, a fire that spreads to 4-connected
//! flammable neighbors once per propagation tick, and a player-controlled
//! firefighter who douses cells with a limited stock of water charges.
//!
//! Rendering, keyboard input, and frame pacing live in the demo crates;
//! this crate is deliberately free of terminal and timing code.

// Core types and configuration
pub mod core_types;

// City board and fire propagation
pub mod grid;

// Firefighter and game session
pub mod session;

// Re-export core types
pub use core_types::{Cell, EdgePolicy, GameConfig, TileType};

// Re-export board types
pub use grid::{CityGrid, PlacementError};

// Re-export session types
pub use session::{Direction, Firefighter, GameSession, Scoring, SessionError};
