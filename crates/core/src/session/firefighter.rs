//! The player-controlled firefighter.

use crate::core_types::{EdgePolicy, TileType};
use crate::grid::CityGrid;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Movement direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Score deltas applied by a detonation, taken from the game config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    /// Points earned for dousing a burning cell.
    pub fire_bonus: u32,
    /// Points lost for flooding a house.
    pub house_penalty: u32,
}

/// Player avatar: a board position, a stock of water charges, a score, and
/// a cached read of the tile underneath.
///
/// The cache is refreshed after every move and after every propagation
/// tick (fire may spread onto the firefighter's cell); detonation scores
/// off the cached value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firefighter {
    row: usize,
    col: usize,
    charges: u32,
    score: u32,
    current_tile: TileType,
}

impl Firefighter {
    /// Create a firefighter standing on `tile` at `(row, col)`.
    ///
    /// Normally constructed by [`GameSession`](crate::GameSession), which
    /// picks a house cell for the starting position.
    pub fn new(row: usize, col: usize, charges: u32, tile: TileType) -> Self {
        Firefighter {
            row,
            col,
            charges,
            score: 0,
            current_tile: tile,
        }
    }

    /// Current position as `(row, col)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Water charges remaining.
    pub fn charges(&self) -> u32 {
        self.charges
    }

    /// Current score. Never negative.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Cached tile under the firefighter.
    pub fn current_tile(&self) -> TileType {
        self.current_tile
    }

    /// Re-read the tile under the firefighter from the board.
    pub(crate) fn refresh_tile(&mut self, grid: &CityGrid) {
        if let Some(cell) = grid.query(self.row, self.col) {
            self.current_tile = cell.tile;
        }
    }

    /// Move one cell in `direction`.
    ///
    /// [`EdgePolicy::Wrap`] re-enters from the opposite edge;
    /// [`EdgePolicy::Clamp`] leaves the position unchanged at the boundary.
    /// Either way the position stays inside the board and the tile cache is
    /// refreshed.
    pub fn step(&mut self, direction: Direction, grid: &CityGrid, policy: EdgePolicy) {
        let (width, height) = grid.dimensions();
        match policy {
            EdgePolicy::Wrap => match direction {
                Direction::Up => self.row = (self.row + height - 1) % height,
                Direction::Down => self.row = (self.row + 1) % height,
                Direction::Left => self.col = (self.col + width - 1) % width,
                Direction::Right => self.col = (self.col + 1) % width,
            },
            EdgePolicy::Clamp => match direction {
                Direction::Up => self.row = self.row.saturating_sub(1),
                Direction::Down => {
                    if self.row + 1 < height {
                        self.row += 1;
                    }
                }
                Direction::Left => self.col = self.col.saturating_sub(1),
                Direction::Right => {
                    if self.col + 1 < width {
                        self.col += 1;
                    }
                }
            },
        }
        self.refresh_tile(grid);
    }

    /// Detonate a water charge, dousing the current cell.
    ///
    /// Returns `false` without touching the board when no charges remain.
    /// Scoring reads the tile before it is doused: a burning cell earns
    /// `fire_bonus`, a house costs `house_penalty` (the score saturates at
    /// zero), grass and water change nothing.
    pub fn detonate(&mut self, grid: &mut CityGrid, scoring: Scoring) -> bool {
        if self.charges == 0 {
            return false;
        }
        self.charges -= 1;
        match self.current_tile {
            TileType::Fire => self.score += scoring.fire_bonus,
            TileType::House => self.score = self.score.saturating_sub(scoring.house_penalty),
            TileType::Grass | TileType::Water => {}
        }
        grid.extinguish_at(self.row, self.col);
        self.refresh_tile(grid);
        debug!(
            row = self.row,
            col = self.col,
            charges = self.charges,
            score = self.score,
            "water charge detonated"
        );
        true
    }
}
