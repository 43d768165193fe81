use serde::{Deserialize, Serialize};

use crate::*;

/// Three cell indices that win when they all hold the same mark.
pub type Line = [usize; SIDE];

/// All winning lines in priority order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win { player: Player, line: Line },
    Draw,
}

impl Outcome {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win { .. } | Self::Draw)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Win { player, .. } => Some(player),
            _ => None,
        }
    }

    pub const fn winning_line(self) -> Option<Line> {
        match self {
            Self::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Whether `index` is part of the winning line, if there is one.
    pub fn is_on_winning_line(self, index: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&index))
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Derives the result of `board` from scratch.
///
/// The first line of [`LINES`] filled with a single player's mark decides the
/// winner. A full board without such a line is a draw.
pub fn compute_outcome(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Marked(player) = board[a] {
            if board[b] == board[a] && board[c] == board[a] {
                return Outcome::Win { player, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
