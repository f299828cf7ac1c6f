//! Core rules for a 4x4 sliding-tile (2048-style) game.
//!
//! - `engine` holds the grid type and the pure directional merge pass.
//! - `spawn` places random tiles; all randomness is injected via `rand::Rng`
//!   so a seeded generator replays the same game.
//! - `session` ties grid, score, and spawning into a caller-owned state
//!   object, so there is no module-global game state anywhere.

pub mod engine;
pub mod session;
pub mod spawn;

pub use engine::{apply_move, has_legal_move, Grid, Move, MoveOutcome, GRID_SIZE};
pub use session::GameSession;
pub use spawn::{spawn_tile, SPAWN_VALUES};
