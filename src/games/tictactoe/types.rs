//! Core domain types for tic-tac-toe.

use crossterm::style::Stylize;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// Divider printed between rendered rows.
const ROW_DIVIDER: &str = "--+---+--";

/// Player mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Player {
    /// Mark `X`.
    X,
    /// Mark `O`.
    O,
}

impl Player {
    /// Returns the character typed and rendered for this mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn plain(self) -> String {
        match self {
            Square::Empty => " ".to_string(),
            Square::Occupied(player) => player.symbol().to_string(),
        }
    }

    fn styled(self) -> String {
        match self {
            Square::Empty => " ".to_string(),
            Square::Occupied(Player::X) => "X".red().to_string(),
            Square::Occupied(Player::O) => "O".blue().to_string(),
        }
    }
}

/// Errors raised by board access.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Row or column outside `0..3`.
    #[display("Square ({row}, {column}) is outside the board")]
    OutOfRange {
        /// Requested row (0-indexed).
        row: usize,
        /// Requested column (0-indexed).
        column: usize,
    },

    /// The target square already holds a mark.
    #[display("Square ({row}, {column}) is already occupied by {occupant}")]
    CellOccupied {
        /// Requested row (0-indexed).
        row: usize,
        /// Requested column (0-indexed).
        column: usize,
        /// Mark already present.
        occupant: Player,
    },
}

impl std::error::Error for BoardError {}

/// 3x3 tic-tac-toe board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at `(row, column)`, both 0-indexed.
    pub fn get(&self, row: usize, column: usize) -> Result<Square, BoardError> {
        self.squares
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .ok_or(BoardError::OutOfRange { row, column })
    }

    /// Places `player` at `(row, column)`.
    ///
    /// Only empty squares accept a mark. A rejected write leaves the board
    /// untouched.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, column: usize, player: Player) -> Result<(), BoardError> {
        match self.get(row, column)? {
            Square::Empty => {
                self.squares[row][column] = Square::Occupied(player);
                Ok(())
            }
            Square::Occupied(occupant) => Err(BoardError::CellOccupied {
                row,
                column,
                occupant,
            }),
        }
    }

    /// Checks if a square is empty. Out-of-range squares are not.
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        matches!(self.get(row, column), Ok(Square::Empty))
    }

    /// Returns all squares, row-major.
    pub fn squares(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Formats the board as plain text.
    pub fn render(&self) -> String {
        self.render_with(false)
    }

    /// Formats the board, optionally coloring the marks.
    pub fn render_with(&self, color: bool) -> String {
        let mut result = String::new();
        for (row, cells) in self.squares.iter().enumerate() {
            let rendered: Vec<String> = cells
                .iter()
                .map(|square| if color { square.styled() } else { square.plain() })
                .collect();
            result.push_str(&rendered.join(" | "));
            result.push_str(" \n");

            if row < BOARD_SIZE - 1 {
                if color {
                    result.push_str(&ROW_DIVIDER.dark_grey().to_string());
                } else {
                    result.push_str(ROW_DIVIDER);
                }
                result.push('\n');
            }
        }
        result.push('\n');
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Outcome of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// No line is complete yet.
    InProgress,
    /// A player completed a line.
    Won(Player),
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::InProgress => None,
            GameResult::Won(player) => Some(player),
        }
    }
}
