use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of cells on the board, indexed row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub const CELL_COUNT: usize = 9;

/// Number of cells per row and per column.
pub const SIDE: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Marked(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Marked(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells, mostly useful for setting up positions.
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn validate_index(index: usize) -> Result<usize> {
        if index < CELL_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Writes `player` into an empty cell; occupied cells are never overwritten.
    pub(crate) fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells[index] {
            Cell::Empty => {
                self.cells[index] = Cell::Marked(player);
                true
            }
            Cell::Marked(_) => false,
        }
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for cell in chunk {
                let symbol = cell.player().map_or(".", Player::symbol);
                f.write_str(symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.marked_count(), 0);
        assert!(!board.is_full());
        assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn place_never_overwrites() {
        let mut board = Board::new();

        assert!(board.place(4, Player::X));
        assert!(!board.place(4, Player::O));
        assert_eq!(board[4], Cell::Marked(Player::X));
        assert_eq!(board.marked_count(), 1);
    }

    #[test]
    fn validate_index_rejects_out_of_range() {
        assert_eq!(Board::validate_index(8), Ok(8));
        assert_eq!(Board::validate_index(9), Err(GameError::InvalidIndex(9)));
        assert_eq!(Board::new().cell_at(CELL_COUNT), None);
    }

    #[test]
    fn other_player_alternates() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::default(), Player::X);
    }
}
