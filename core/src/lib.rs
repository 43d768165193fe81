#![no_std]

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use lines::*;
pub use tally::*;

mod board;
mod engine;
mod error;
mod lines;
mod tally;

/// Result of a single [`GameEngine::attempt_move`] call that was not rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Target cell was already taken, nothing happened.
    NoChange,
    /// Mark placed, game goes on with the other player.
    Placed,
    /// Mark placed and it completed `line` for `player`.
    Won { player: Player, line: Line },
    /// Mark placed and it filled the board without a line.
    Draw,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won { .. } => true,
            Draw => true,
        }
    }

    /// Whether this move just won the game, i.e. the celebration should fire.
    ///
    /// Only the move that transitions the game into [`Outcome::Win`] returns
    /// [`MoveOutcome::Won`], so this is true at most once per game.
    pub const fn celebrates(self) -> bool {
        matches!(self, Self::Won { .. })
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Draw)
    }
}

/// Lets callers collapse the result of an engine call into "re-render or not".
pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for core::result::Result<MoveOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome| outcome.has_update())
    }
}
