//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from board
//! storage so the game loop can compose them.

pub mod win;

pub use win::{column_complete, diagonals_complete, evaluate, row_complete};
