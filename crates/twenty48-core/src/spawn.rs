use rand::Rng;

use crate::engine::Grid;

/// Values a freshly spawned tile can take, drawn uniformly.
pub const SPAWN_VALUES: [u32; 5] = [2, 4, 8, 16, 32];

/// Place one random tile on a uniformly chosen empty cell and return the new
/// grid plus the cell it landed on. No-op (`None` position) when the grid is
/// full.
///
/// Deterministic under a seeded RNG:
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use twenty48_core::{spawn_tile, Grid};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let (grid, at) = spawn_tile(Grid::EMPTY, &mut rng);
/// assert_eq!(grid.count_empty(), 15);
/// assert!(at.is_some());
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> (Grid, Option<(usize, usize)>) {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (grid, None);
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = SPAWN_VALUES[rng.gen_range(0..SPAWN_VALUES.len())];
    (grid.with_cell(row, col, value), Some((row, col)))
}
