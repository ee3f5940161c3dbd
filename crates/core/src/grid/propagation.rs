//! Two-phase fire propagation over the city board.
//!
//! Each propagation tick advances the fire front by exactly one ring of
//! 4-connected neighbors. The marking phase scans the whole board before
//! any tile changes, so a cell ignited this tick can never ignite its own
//! neighbor within the same tick. In-place single-pass mutation would make
//! propagation speed depend on scan order; the phase split is the
//! load-bearing invariant here.

use super::CityGrid;
use crate::core_types::TileType;
use tracing::debug;

/// Row/col offsets of the 4-connected neighborhood. Fire never spreads
/// diagonally and never wraps around the board edge.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl CityGrid {
    /// Advance the fire front by one ring.
    ///
    /// Returns the number of newly ignited cells; zero means the fire has
    /// saturated (every reachable flammable cell already burns).
    pub fn spread_fire(&mut self) -> usize {
        self.mark_endangered();
        let ignited = self.convert_endangered();
        debug!(ignited, "fire propagation tick");
        ignited
    }

    /// Marking phase: flag every flammable 4-neighbor of a burning cell.
    ///
    /// Marking is idempotent; a cell flagged by several burning neighbors
    /// still converts once. Out-of-board neighbors are skipped.
    fn mark_endangered(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[self.index(row, col)].tile != TileType::Fire {
                    continue;
                }
                for (d_row, d_col) in NEIGHBOR_OFFSETS {
                    let n_row = row as i32 + d_row;
                    let n_col = col as i32 + d_col;
                    if n_row < 0 || n_col < 0 {
                        continue;
                    }
                    let (n_row, n_col) = (n_row as usize, n_col as usize);
                    if !self.in_bounds(n_row, n_col) {
                        continue;
                    }
                    let idx = self.index(n_row, n_col);
                    if self.cells[idx].tile.is_flammable() {
                        self.cells[idx].in_danger = true;
                    }
                }
            }
        }
    }

    /// Conversion phase: every flagged cell ignites and its flag is
    /// cleared, leaving no danger marks behind.
    fn convert_endangered(&mut self) -> usize {
        let mut ignited = 0;
        for cell in &mut self.cells {
            if cell.in_danger {
                cell.tile = TileType::Fire;
                cell.in_danger = false;
                ignited += 1;
            }
        }
        ignited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::TileType::{Fire, Grass, House, Water};
    use proptest::prelude::*;

    #[test]
    fn test_center_fire_ignites_cross_not_corners() {
        let mut grid = CityGrid::from_tiles(
            3,
            3,
            vec![
                Grass, Grass, Grass, //
                Grass, Fire, Grass, //
                Grass, Grass, Grass,
            ],
        )
        .unwrap();

        let ignited = grid.spread_fire();
        assert_eq!(ignited, 4);

        for (row, col) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(grid.cell(row, col).unwrap().tile, Fire);
        }
        for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(grid.cell(row, col).unwrap().tile, Grass);
        }
    }

    #[test]
    fn test_spread_advances_one_ring_per_tick() {
        // A 1x4 strip: one tick must ignite only the direct neighbor, not
        // the whole line. Violating the phase order would burn further.
        let mut grid = CityGrid::from_tiles(4, 1, vec![Fire, Grass, Grass, Grass]).unwrap();

        assert_eq!(grid.spread_fire(), 1);
        assert_eq!(grid.cell(0, 1).unwrap().tile, Fire);
        assert_eq!(grid.cell(0, 2).unwrap().tile, Grass);
        assert_eq!(grid.cell(0, 3).unwrap().tile, Grass);

        assert_eq!(grid.spread_fire(), 1);
        assert_eq!(grid.cell(0, 2).unwrap().tile, Fire);
        assert_eq!(grid.cell(0, 3).unwrap().tile, Grass);
    }

    #[test]
    fn test_water_blocks_spread() {
        let mut grid = CityGrid::from_tiles(3, 1, vec![Fire, Water, House]).unwrap();
        assert_eq!(grid.spread_fire(), 0);
        assert_eq!(grid.cell(0, 1).unwrap().tile, Water);
        assert_eq!(grid.cell(0, 2).unwrap().tile, House);
    }

    #[test]
    fn test_houses_burn_like_grass() {
        let mut grid = CityGrid::from_tiles(3, 1, vec![House, Fire, House]).unwrap();
        assert_eq!(grid.spread_fire(), 2);
        assert_eq!(grid.count_of(Fire), 3);
    }

    #[test]
    fn test_edge_fire_skips_out_of_board_neighbors() {
        let mut grid = CityGrid::from_tiles(2, 2, vec![Fire, Grass, Grass, Grass]).unwrap();
        assert_eq!(grid.spread_fire(), 2);
        assert_eq!(grid.cell(0, 1).unwrap().tile, Fire);
        assert_eq!(grid.cell(1, 0).unwrap().tile, Fire);
        assert_eq!(grid.cell(1, 1).unwrap().tile, Grass);
    }

    #[test]
    fn test_saturated_board_returns_zero() {
        let mut grid = CityGrid::from_tiles(2, 2, vec![Fire; 4]).unwrap();
        assert_eq!(grid.spread_fire(), 0);
    }

    #[test]
    fn test_no_danger_marks_survive_a_tick() {
        let mut grid = CityGrid::from_tiles(3, 3, vec![Grass; 9]).unwrap();
        grid.cell_mut(1, 1).unwrap().tile = Fire;
        grid.spread_fire();
        let (width, height) = grid.dimensions();
        for row in 0..height {
            for col in 0..width {
                assert!(!grid.cell(row, col).unwrap().in_danger);
            }
        }
    }

    fn arb_tile() -> impl Strategy<Value = TileType> {
        prop_oneof![Just(Fire), Just(Grass), Just(House), Just(Water)]
    }

    fn arb_board() -> impl Strategy<Value = (usize, usize, Vec<TileType>)> {
        (1usize..9, 1usize..9).prop_flat_map(|(width, height)| {
            (
                Just(width),
                Just(height),
                prop::collection::vec(arb_tile(), width * height),
            )
        })
    }

    /// Distinct in-bounds flammable neighbors of fire cells, computed
    /// independently of the implementation under test.
    fn expected_ignitions(width: usize, height: usize, tiles: &[TileType]) -> usize {
        let mut count = 0;
        for row in 0..height {
            for col in 0..width {
                if !tiles[row * width + col].is_flammable() {
                    continue;
                }
                let burning_neighbor = NEIGHBOR_OFFSETS.iter().any(|&(d_row, d_col)| {
                    let n_row = row as i32 + d_row;
                    let n_col = col as i32 + d_col;
                    n_row >= 0
                        && n_col >= 0
                        && (n_row as usize) < height
                        && (n_col as usize) < width
                        && tiles[n_row as usize * width + n_col as usize] == Fire
                });
                if burning_neighbor {
                    count += 1;
                }
            }
        }
        count
    }

    proptest! {
        #[test]
        fn prop_spread_matches_neighbor_census((width, height, tiles) in arb_board()) {
            let mut grid = CityGrid::from_tiles(width, height, tiles.clone()).unwrap();
            let before = grid.count_of(Fire);
            let expected = expected_ignitions(width, height, &tiles);

            let ignited = grid.spread_fire();

            prop_assert_eq!(ignited, expected);
            prop_assert_eq!(grid.count_of(Fire), before + expected);
        }

        #[test]
        fn prop_water_is_terminal((width, height, tiles) in arb_board()) {
            let mut grid = CityGrid::from_tiles(width, height, tiles.clone()).unwrap();
            grid.spread_fire();
            for (idx, tile) in tiles.iter().enumerate() {
                if *tile == Water {
                    prop_assert_eq!(grid.cells[idx].tile, Water);
                }
            }
        }

        #[test]
        fn prop_fire_never_unignites((width, height, tiles) in arb_board()) {
            let mut grid = CityGrid::from_tiles(width, height, tiles).unwrap();
            let mut previous = grid.count_of(Fire);
            for _ in 0..4 {
                grid.spread_fire();
                let current = grid.count_of(Fire);
                prop_assert!(current >= previous);
                previous = current;
            }
        }
    }
}
