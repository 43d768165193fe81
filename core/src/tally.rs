use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Wins and draws counted over the lifetime of one app instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    x_wins: Saturating<u32>,
    o_wins: Saturating<u32>,
    draws: Saturating<u32>,
}

impl SessionTally {
    pub const fn new() -> Self {
        Self {
            x_wins: Saturating(0),
            o_wins: Saturating(0),
            draws: Saturating(0),
        }
    }

    pub const fn x_wins(&self) -> u32 {
        self.x_wins.0
    }

    pub const fn o_wins(&self) -> u32 {
        self.o_wins.0
    }

    pub const fn draws(&self) -> u32 {
        self.draws.0
    }

    pub const fn wins_of(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins.0,
            Player::O => self.o_wins.0,
        }
    }

    /// Number of completed games.
    pub fn total(&self) -> u32 {
        (self.x_wins + self.o_wins + self.draws).0
    }

    /// Counts a finished game; an in-progress outcome is ignored.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Win {
                player: Player::X, ..
            } => self.x_wins += Saturating(1),
            Outcome::Win {
                player: Player::O, ..
            } => self.o_wins += Saturating(1),
            Outcome::Draw => self.draws += Saturating(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_each_outcome_kind() {
        let mut tally = SessionTally::new();

        tally.record(Outcome::Win {
            player: Player::X,
            line: [0, 1, 2],
        });
        tally.record(Outcome::Win {
            player: Player::O,
            line: [2, 4, 6],
        });
        tally.record(Outcome::Win {
            player: Player::O,
            line: [3, 4, 5],
        });
        tally.record(Outcome::Draw);
        tally.record(Outcome::InProgress);

        assert_eq!(tally.x_wins(), 1);
        assert_eq!(tally.o_wins(), 2);
        assert_eq!(tally.draws(), 1);
        assert_eq!(tally.wins_of(Player::O), 2);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut tally = SessionTally::new();
        tally.record(Outcome::Draw);

        tally.reset();

        assert_eq!(tally, SessionTally::default());
        assert_eq!(tally.total(), 0);
    }
}
