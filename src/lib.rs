//! Strictly Tic-Tac-Toe library - console tic-tac-toe for two players
//!
//! Two players share one terminal and place marks on a 3x3 board until a
//! row, column or diagonal is filled by a single mark.
//!
//! # Architecture
//!
//! - **Board**: square storage, guarded writes and text rendering
//! - **Rules**: win detection over the touched row, column and both diagonals
//! - **Input**: pure parsers for the symbol, row and column prompts
//! - **GameLoop**: the prompt/apply/evaluate state machine
//! - **Settings**: console options loaded from TOML
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_tictactoe::{GameLoop, GameSettings, Player};
//!
//! let input = Cursor::new("X\n1\n1\nX\n2\n2\nX\n3\n3\n");
//! let settings = GameSettings::new().with_clear_screen(false);
//! let mut game = GameLoop::new(input, Vec::new(), settings);
//! assert_eq!(game.run().unwrap(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, GameSettings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardError, Field, GameError, GameLoop, GameResult, GameState, InputError,
    LoopState, Move, MoveError, Player, Square, column_complete, diagonals_complete, evaluate,
    parse_coordinate, parse_symbol, row_complete,
};
