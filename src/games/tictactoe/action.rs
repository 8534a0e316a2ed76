//! First-class action type for tic-tac-toe.
//!
//! A move is the player's validated intent. It is built once all three
//! prompts have produced a value and is applied to the board as a unit.

use super::{BoardError, Player};

/// A move in tic-tac-toe: a mark placed at a 0-indexed `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub player: Player,
    /// Target row (0-indexed).
    pub row: usize,
    /// Target column (0-indexed).
    pub column: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> row {}, column {}", self.player, self.row + 1, self.column + 1)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board refused the write.
    #[display("{}", _0)]
    Board(BoardError),

    /// The game already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(err) => Some(err),
            MoveError::GameOver(_) => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}
