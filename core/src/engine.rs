use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a view needs to draw the game, copied out of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
    pub outcome: Outcome,
    pub tally: SessionTally,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    outcome: Outcome,
    tally: SessionTally,
}

impl GameEngine {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
            tally: SessionTally::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next. Frozen on the last mover once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome,
            tally: self.tally,
        }
    }

    /// Whether a click on `index` would be accepted right now.
    pub fn can_play_at(&self, index: usize) -> bool {
        !self.is_finished() && self.board.cell_at(index).is_some_and(Cell::is_empty)
    }

    /// Places the current player's mark on `index`.
    ///
    /// Out-of-range indices and moves after the game ended are errors, an
    /// occupied cell is [`MoveOutcome::NoChange`]. None of those touch any
    /// state.
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome> {
        let index = Board::validate_index(index)?;
        self.check_not_finished()?;

        let player = self.turn;
        if !self.board.place(index, player) {
            return Ok(MoveOutcome::NoChange);
        }
        log::debug!("{} takes cell {}", player, index);

        self.outcome = compute_outcome(&self.board);
        Ok(match self.outcome {
            Outcome::InProgress => {
                self.turn = player.other();
                MoveOutcome::Placed
            }
            Outcome::Win { player, line } => {
                self.end_game();
                MoveOutcome::Won { player, line }
            }
            Outcome::Draw => {
                self.end_game();
                MoveOutcome::Draw
            }
        })
    }

    /// Starts a new game on an empty board with X to move. The tally is kept.
    pub fn reset_board(&mut self) {
        log::debug!("board reset");
        self.board = Board::new();
        self.turn = Player::X;
        self.outcome = Outcome::InProgress;
    }

    /// Zeroes the tally without touching the game in progress.
    pub fn reset_tally(&mut self) {
        log::debug!("tally reset");
        self.tally.reset();
    }

    fn end_game(&mut self) {
        log::info!("game over: {:?}", self.outcome);
        self.tally.record(self.outcome);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
