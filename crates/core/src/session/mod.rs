//! Game session: the board, the firefighter, and the turn counter.
//!
//! `GameSession` is the single entry point the frontends drive: keyboard
//! events map to [`GameSession::move_firefighter`] and
//! [`GameSession::detonate`], and the fixed-interval clock maps to
//! [`GameSession::advance_fire`]. All state lives here and is accessed by
//! one loop thread only, so nothing needs locking.

pub mod firefighter;

// Re-export public types from firefighter
pub use firefighter::{Direction, Firefighter, Scoring};

use crate::core_types::{GameConfig, TileType};
use crate::grid::{CityGrid, PlacementError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use tracing::info;

/// Errors that can occur while setting up a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Board dimensions must both be non-zero.
    InvalidDimensions {
        /// Configured width in cells.
        width: usize,
        /// Configured height in cells.
        height: usize,
    },
    /// No starting house was found for the firefighter within the
    /// configured attempt bound.
    Placement(PlacementError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "board dimensions must be non-zero, got {width}x{height}")
            }
            Self::Placement(err) => write!(f, "failed to place firefighter: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDimensions { .. } => None,
            Self::Placement(err) => Some(err),
        }
    }
}

impl From<PlacementError> for SessionError {
    fn from(err: PlacementError) -> Self {
        Self::Placement(err)
    }
}

/// One running game: the city board, the firefighter, and the
/// remaining-turns counter.
///
/// The turn counter is owned here rather than living in module-level state;
/// movement consumes it explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    grid: CityGrid,
    firefighter: Firefighter,
    turns_remaining: Option<u32>,
}

impl GameSession {
    /// Set up a new game: random city, one ignition point, firefighter
    /// placed on a house.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidDimensions`] for a zero-sized board, and
    /// [`SessionError::Placement`] when no house cell was found within
    /// `config.placement_attempts` samples (possible on a board the random
    /// fill left houseless).
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, SessionError> {
        if config.width == 0 || config.height == 0 {
            return Err(SessionError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let mut grid = CityGrid::new_random(config.width, config.height, rng);
        let (ignition_row, ignition_col) = grid.ignite_random_cell(rng);
        let (row, col) =
            grid.random_cell_of_type(TileType::House, rng, config.placement_attempts)?;
        let firefighter = Firefighter::new(row, col, config.initial_charges, TileType::House);

        info!(
            width = config.width,
            height = config.height,
            ignition_row,
            ignition_col,
            start_row = row,
            start_col = col,
            "new game session"
        );

        Ok(GameSession {
            turns_remaining: config.turn_limit,
            config,
            grid,
            firefighter,
        })
    }

    /// Move the firefighter one cell, consuming a turn when a turn limit is
    /// configured.
    ///
    /// Returns `false` (and moves nothing) once the turn limit is
    /// exhausted.
    pub fn move_firefighter(&mut self, direction: Direction) -> bool {
        if let Some(turns) = self.turns_remaining {
            if turns == 0 {
                return false;
            }
            self.turns_remaining = Some(turns - 1);
        }
        self.firefighter
            .step(direction, &self.grid, self.config.edge_policy);
        true
    }

    /// Detonate a water charge on the firefighter's cell.
    ///
    /// Returns whether a charge was spent; the caller uses this to decide
    /// whether to re-render.
    pub fn detonate(&mut self) -> bool {
        let scoring = Scoring {
            fire_bonus: self.config.fire_bonus,
            house_penalty: self.config.house_penalty,
        };
        self.firefighter.detonate(&mut self.grid, scoring)
    }

    /// Run one propagation tick and return the number of newly ignited
    /// cells.
    ///
    /// Fire may spread onto the firefighter's cell; the firefighter is
    /// unaffected beyond the tile cache refresh.
    pub fn advance_fire(&mut self) -> usize {
        let ignited = self.grid.spread_fire();
        self.firefighter.refresh_tile(&self.grid);
        ignited
    }

    /// The city board, for rendering.
    pub fn grid(&self) -> &CityGrid {
        &self.grid
    }

    /// The firefighter, for rendering.
    pub fn firefighter(&self) -> &Firefighter {
        &self.firefighter
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.firefighter.score()
    }

    /// Water charges remaining.
    pub fn charges(&self) -> u32 {
        self.firefighter.charges()
    }

    /// Moves remaining, `None` when unlimited.
    pub fn turns_remaining(&self) -> Option<u32> {
        self.turns_remaining
    }
}
