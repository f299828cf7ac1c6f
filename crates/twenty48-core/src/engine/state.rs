use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the playing grid. Fixed for the lifetime of a game.
pub const GRID_SIZE: usize = 4;

/// Row-major cell values backing a [`Grid`].
pub type Cells = [[u32; GRID_SIZE]; GRID_SIZE];

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Counterclockwise quarter-turns that bring this direction onto the
    /// canonical leftward pass, paired with the turns that undo them.
    /// Forward and inverse always sum to 0 mod 4.
    pub(crate) fn turns(self) -> (usize, usize) {
        match self {
            Move::Left => (0, 0),
            Move::Up => (1, 3),
            Move::Right => (2, 2),
            Move::Down => (3, 1),
        }
    }
}

/// A 4x4 grid of tile values. 0 marks an empty cell; every non-zero cell
/// holds a power of two >= 2.
///
/// Mutation only happens through accepted moves and tile spawns; everything
/// else takes the grid by value (it is `Copy`) or by shared reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid(pub(crate) Cells);

impl Grid {
    /// A constant all-empty grid.
    pub const EMPTY: Grid = Grid([[0; GRID_SIZE]; GRID_SIZE]);

    /// Construct a grid from row-major cell values.
    ///
    /// Panics if any non-zero cell is not a power of two >= 2. A malformed
    /// grid is a programmer error, not recoverable input: the merge pass
    /// relies on these invariants.
    pub fn from_rows(rows: Cells) -> Self {
        for row in &rows {
            for &v in row {
                assert!(
                    v == 0 || (v >= 2 && v.is_power_of_two()),
                    "invalid tile value {v}"
                );
            }
        }
        Grid(rows)
    }

    /// Value at (row, col); 0 for an empty cell.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Borrow the raw row-major cells.
    #[inline]
    pub fn rows(&self) -> &Cells {
        &self.0
    }

    /// Slide/merge tiles in `direction`. See [`super::apply_move`].
    #[inline]
    pub fn apply_move(self, direction: Move) -> MoveOutcome {
        super::ops::apply_move(self, direction)
    }

    /// True if any move can still change this grid.
    #[inline]
    pub fn has_legal_move(&self) -> bool {
        super::ops::has_legal_move(self)
    }

    /// Count the number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in self.0.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// The highest tile value present, 0 on an empty grid.
    pub fn highest_tile(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Copy of this grid with one cell replaced. The target cell must be
    /// empty and the value a valid tile.
    pub(crate) fn with_cell(self, row: usize, col: usize, value: u32) -> Self {
        debug_assert_eq!(self.0[row][col], 0, "spawning onto an occupied cell");
        debug_assert!(value >= 2 && value.is_power_of_two());
        let mut cells = self.0;
        cells[row][col] = value;
        Grid(cells)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for &v in row {
                if v == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{v:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Result of applying a directional move to a grid.
///
/// `moved == false` guarantees `grid` is cell-for-cell identical to the
/// input and `score_gained == 0`; callers must discard such outcomes
/// (no spawn, no score update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub moved: bool,
    pub score_gained: u64,
}
