//! Tile and cell types for the city board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four states a city block can be in.
///
/// Water is terminal: propagation never converts a water cell, and nothing
/// in the game converts water back to any other tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    /// A burning block. Spreads to flammable 4-neighbors each tick.
    Fire,
    /// Open ground. Burns.
    Grass,
    /// A building. Burns, and flooding it costs the player points.
    House,
    /// A doused or naturally wet block. Fire never takes it.
    Water,
}

impl TileType {
    /// Whether fire can spread onto this tile.
    pub fn is_flammable(&self) -> bool {
        matches!(self, TileType::Grass | TileType::House)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Grass => write!(f, "Grass"),
            Self::House => write!(f, "House"),
            Self::Water => write!(f, "Water"),
        }
    }
}

/// One block of the city board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Current tile state.
    pub tile: TileType,
    /// Transient danger flag: set during the marking phase of a propagation
    /// pass and always consumed by the conversion phase of the same pass.
    /// Never survives a completed `spread_fire` call.
    pub in_danger: bool,
}

impl Cell {
    /// Create a cell with no danger mark.
    pub fn new(tile: TileType) -> Self {
        Self {
            tile,
            in_danger: false,
        }
    }

    /// A fresh doused cell.
    pub fn water() -> Self {
        Self::new(TileType::Water)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(TileType::Grass)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile)
    }
}
