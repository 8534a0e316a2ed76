//! Win detection logic for tic-tac-toe.
//!
//! Only the row and column touched by the latest move are scanned, while
//! both diagonals are rescanned on every call.

use super::super::{Board, GameResult, Player, Square};
use tracing::instrument;

/// Returns the player holding all three squares of `line`.
fn uniform(line: [Square; 3]) -> Option<Player> {
    let [first, second, third] = line;
    let player = first.player()?;
    (second == first && third == first).then_some(player)
}

/// Checks whether `row` is filled by a single player.
///
/// Returns `None` for rows with an empty square, mixed marks, or an index
/// outside the board.
#[instrument(skip(board))]
pub fn row_complete(board: &Board, row: usize) -> Option<Player> {
    board.squares().get(row).copied().and_then(uniform)
}

/// Checks whether `column` is filled by a single player.
#[instrument(skip(board))]
pub fn column_complete(board: &Board, column: usize) -> Option<Player> {
    let squares = board.squares();
    let line = [
        *squares[0].get(column)?,
        *squares[1].get(column)?,
        *squares[2].get(column)?,
    ];
    uniform(line)
}

/// Checks both diagonals.
///
/// When both are complete the backward diagonal (top-left to bottom-right)
/// decides the winner.
#[instrument(skip(board))]
pub fn diagonals_complete(board: &Board) -> Option<Player> {
    let s = board.squares();
    let backward = uniform([s[0][0], s[1][1], s[2][2]]);
    let forward = uniform([s[0][2], s[1][1], s[2][0]]);
    backward.or(forward)
}

/// Evaluates the board after a move at `(row, column)`.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, row: usize, column: usize) -> GameResult {
    row_complete(board, row)
        .or_else(|| column_complete(board, column))
        .or_else(|| diagonals_complete(board))
        .map_or(GameResult::InProgress, GameResult::Won)
}
