//! Grid engine: the 4x4 board, the directional merge pass, and the
//! terminal-state check.
//!
//! - `Grid` is the owned 4x4 state, validated on construction.
//! - `apply_move` is the pure rotate/compress/merge/unrotate pass.
//! - `has_legal_move` decides whether any move can still change the grid.

mod ops;
pub mod state;

pub use ops::{apply_move, has_legal_move};
pub use state::{Grid, Move, MoveOutcome, GRID_SIZE};
