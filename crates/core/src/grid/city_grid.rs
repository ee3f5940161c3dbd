//! Fixed-size city board with random construction and dousing.
//!
//! The board is a row-major 2D array of [`Cell`]s, created once at game
//! start and never resized. Coordinates are `(row, col)` with
//! `row ∈ [0, height)` and `col ∈ [0, width)`.

use crate::core_types::{Cell, TileType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Returned when rejection sampling fails to find a cell of the requested
/// tile type within the attempt bound.
///
/// A board can legitimately carry zero cells of a tile type (the random
/// fill gives no guarantees), so placement must fail fast instead of
/// sampling forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementError {
    /// Tile type that was searched for.
    pub tile: TileType,
    /// Number of samples drawn before giving up.
    pub attempts: usize,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no {} cell found after {} sampling attempts",
            self.tile, self.attempts
        )
    }
}

impl Error for PlacementError {}

/// 2D city board in row-major order: `cells[row * width + col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGrid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<Cell>,
}

/// Tiles eligible for the initial random fill. Fire is excluded; the
/// ignition point is forced afterwards by [`CityGrid::ignite_random_cell`].
const INITIAL_TILES: [TileType; 3] = [TileType::Grass, TileType::House, TileType::Water];

impl CityGrid {
    /// Build a board with every cell drawn uniformly from the non-fire
    /// tiles (grass, house, water).
    pub fn new_random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let cells = (0..width * height)
            .map(|_| Cell::new(INITIAL_TILES[rng.random_range(0..INITIAL_TILES.len())]))
            .collect();
        CityGrid {
            width,
            height,
            cells,
        }
    }

    /// Build a board from an explicit tile layout (scenario fixtures).
    ///
    /// Returns `None` when `tiles.len() != width * height`.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<TileType>) -> Option<Self> {
        if tiles.len() != width * height {
            return None;
        }
        Some(CityGrid {
            width,
            height,
            cells: tiles.into_iter().map(Cell::new).collect(),
        })
    }

    /// Get cell index from (row, col) indices
    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether (row, col) lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get cell at board indices (bounds-checked)
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get mutable cell at board indices (bounds-checked)
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Rendering snapshot of the cell at (row, col).
    pub fn query(&self, row: usize, col: usize) -> Option<Cell> {
        self.cell(row, col).copied()
    }

    /// Board dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Board width in cells (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Force one uniformly random cell to fire and return its coordinates.
    ///
    /// The ignition point of the game. Called exactly once per session,
    /// after construction.
    pub fn ignite_random_cell<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (usize, usize) {
        let row = rng.random_range(0..self.height);
        let col = rng.random_range(0..self.width);
        let idx = self.index(row, col);
        self.cells[idx] = Cell::new(TileType::Fire);
        (row, col)
    }

    /// Replace the cell at (row, col) with a fresh water cell, clearing any
    /// danger mark. Idempotent, safe on any tile including fire.
    /// Out-of-range coordinates are a no-op.
    pub fn extinguish_at(&mut self, row: usize, col: usize) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::water();
        }
    }

    /// Sample random cells until one holds `tile`, giving up after
    /// `max_attempts` draws.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] when no cell of the requested type was
    /// hit within the bound, which covers boards that hold none at all.
    pub fn random_cell_of_type<R: Rng + ?Sized>(
        &self,
        tile: TileType,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(usize, usize), PlacementError> {
        for _ in 0..max_attempts {
            let row = rng.random_range(0..self.height);
            let col = rng.random_range(0..self.width);
            if self.cells[self.index(row, col)].tile == tile {
                return Ok((row, col));
            }
        }
        Err(PlacementError {
            tile,
            attempts: max_attempts,
        })
    }

    /// Number of cells currently holding `tile`.
    pub fn count_of(&self, tile: TileType) -> usize {
        self.cells.iter().filter(|c| c.tile == tile).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_board_has_no_fire() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = CityGrid::new_random(18, 9, &mut rng);
        assert_eq!(grid.dimensions(), (18, 9));
        assert_eq!(grid.count_of(TileType::Fire), 0);
        assert_eq!(
            grid.count_of(TileType::Grass)
                + grid.count_of(TileType::House)
                + grid.count_of(TileType::Water),
            18 * 9
        );
    }

    #[test]
    fn test_ignition_forces_exactly_one_fire() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = CityGrid::new_random(18, 9, &mut rng);
        let (row, col) = grid.ignite_random_cell(&mut rng);
        assert!(grid.in_bounds(row, col));
        assert_eq!(grid.count_of(TileType::Fire), 1);
        assert_eq!(grid.cell(row, col).unwrap().tile, TileType::Fire);
    }

    #[test]
    fn test_cell_access_bounds_checked() {
        let grid = CityGrid::from_tiles(3, 2, vec![TileType::Grass; 6]).unwrap();
        assert!(grid.cell(1, 2).is_some());
        assert!(grid.cell(2, 0).is_none());
        assert!(grid.cell(0, 3).is_none());
        assert!(grid.query(1, 1).is_some());
        assert!(grid.query(9, 9).is_none());
    }

    #[test]
    fn test_from_tiles_rejects_length_mismatch() {
        assert!(CityGrid::from_tiles(3, 3, vec![TileType::Grass; 8]).is_none());
    }

    #[test]
    fn test_extinguish_is_idempotent() {
        let mut grid = CityGrid::from_tiles(2, 2, vec![TileType::Fire; 4]).unwrap();
        grid.extinguish_at(0, 0);
        let once = grid.clone();
        grid.extinguish_at(0, 0);
        assert_eq!(grid, once);
        assert_eq!(grid.cell(0, 0).unwrap().tile, TileType::Water);
    }

    #[test]
    fn test_extinguish_clears_danger_mark() {
        let mut grid = CityGrid::from_tiles(1, 1, vec![TileType::House]).unwrap();
        grid.cell_mut(0, 0).unwrap().in_danger = true;
        grid.extinguish_at(0, 0);
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.tile, TileType::Water);
        assert!(!cell.in_danger);
    }

    #[test]
    fn test_extinguish_out_of_range_is_noop() {
        let mut grid = CityGrid::from_tiles(2, 2, vec![TileType::Grass; 4]).unwrap();
        let before = grid.clone();
        grid.extinguish_at(5, 5);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_placement_finds_house() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = CityGrid::from_tiles(
            3,
            1,
            vec![TileType::Grass, TileType::House, TileType::Water],
        )
        .unwrap();
        let (row, col) = grid
            .random_cell_of_type(TileType::House, &mut rng, 1000)
            .unwrap();
        assert_eq!((row, col), (0, 1));
    }

    #[test]
    fn test_placement_fails_fast_on_houseless_board() {
        let mut rng = StdRng::seed_from_u64(4);
        let grid = CityGrid::from_tiles(4, 4, vec![TileType::Grass; 16]).unwrap();
        let err = grid
            .random_cell_of_type(TileType::House, &mut rng, 64)
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError {
                tile: TileType::House,
                attempts: 64
            }
        );
        assert_eq!(
            err.to_string(),
            "no House cell found after 64 sampling attempts"
        );
    }
}
