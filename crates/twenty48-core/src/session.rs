use rand::Rng;

use crate::engine::{apply_move, Grid, Move, MoveOutcome};
use crate::spawn::spawn_tile;

/// Number of tiles seeded onto a fresh grid.
pub const START_TILES: usize = 2;

/// One game in progress: the grid plus its running score.
///
/// Owned by the caller and mutated only through [`GameSession::apply`] and
/// [`GameSession::restart`]. All randomness is injected, so driving two
/// sessions with equally seeded RNGs and the same moves replays the same
/// game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    grid: Grid,
    score: u64,
    last_spawn: Option<(usize, usize)>,
}

impl GameSession {
    /// Fresh game: empty grid seeded with [`START_TILES`] random tiles,
    /// score zero.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut grid = Grid::EMPTY;
        let mut last_spawn = None;
        for _ in 0..START_TILES {
            let (next, at) = spawn_tile(grid, rng);
            grid = next;
            last_spawn = at;
        }
        Self {
            grid,
            score: 0,
            last_spawn,
        }
    }

    /// Apply one directional move.
    ///
    /// When the move changes the grid, the gained score is added and one
    /// random tile spawns. Otherwise the session is left untouched: no
    /// spawn, no score change. The returned outcome reflects the grid
    /// before the spawn.
    pub fn apply<R: Rng + ?Sized>(&mut self, direction: Move, rng: &mut R) -> MoveOutcome {
        let outcome = apply_move(self.grid, direction);
        if outcome.moved {
            self.score += outcome.score_gained;
            let (next, at) = spawn_tile(outcome.grid, rng);
            self.grid = next;
            self.last_spawn = at;
        }
        outcome
    }

    /// Reset to a fresh seeded game. The only way the score goes back to 0.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = GameSession::new(rng);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Cell of the most recently spawned tile, for the "new tile" cue.
    pub fn last_spawn(&self) -> Option<(usize, usize)> {
        self.last_spawn
    }

    /// True once no direction can change the grid.
    pub fn is_over(&self) -> bool {
        !self.grid.has_legal_move()
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }
}
