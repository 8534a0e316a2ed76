mod action;
mod game;
mod input;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameError, GameLoop, GameState, LoopState};
pub use input::{Field, InputError, parse_coordinate, parse_symbol};
pub use rules::{column_complete, diagonals_complete, evaluate, row_complete};
pub use types::{BOARD_SIZE, Board, BoardError, GameResult, Player, Square};
