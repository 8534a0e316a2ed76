//! Console game loop for tic-tac-toe.
//!
//! The loop is an explicit state machine over [`LoopState`]. It is generic
//! over its input and output so a session can be driven from a terminal or
//! from an in-memory buffer.

use super::action::{Move, MoveError};
use super::input::{Field, InputError, parse_coordinate, parse_symbol};
use super::rules::evaluate;
use super::types::{Board, BoardError, GameResult, Player};
use crate::settings::GameSettings;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use derive_getters::Getters;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Message printed when a move targets an occupied square.
const SLOT_FILLED: &str = "That slot is already filled! Try again.";

/// Phase of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for a complete, valid move.
    AwaitingMove,
    /// A move was applied and has not been evaluated yet.
    MoveAccepted(Move),
    /// A player won. Terminal.
    GameOver(Player),
}

/// Everything a single game mutates.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current phase.
    phase: LoopState,
}

impl GameState {
    /// Creates a fresh game with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: LoopState::AwaitingMove,
        }
    }

    /// Applies `action` to the board.
    ///
    /// On success the phase becomes [`LoopState::MoveAccepted`]. On error
    /// neither the board nor the phase change. A finished game accepts no
    /// moves.
    #[instrument(skip(self), fields(action = %action))]
    pub fn apply(&mut self, action: Move) -> Result<(), MoveError> {
        if let LoopState::GameOver(winner) = self.phase {
            return Err(MoveError::GameOver(winner));
        }
        self.board.set(action.row, action.column, action.player)?;
        self.phase = LoopState::MoveAccepted(action);
        Ok(())
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            LoopState::GameOver(player) => Some(player),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that end a game before a winner is found.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Input reached end-of-file mid-game.
    #[display("Input closed before the game finished")]
    InputClosed,
}

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Drives prompts, board updates and win detection.
#[derive(Debug)]
pub struct GameLoop<R, W> {
    input: R,
    output: W,
    state: GameState,
    settings: GameSettings,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    /// Creates a loop over an empty board.
    pub fn new(input: R, output: W, settings: GameSettings) -> Self {
        Self {
            input,
            output,
            state: GameState::new(),
            settings,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the loop, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until a player wins.
    ///
    /// Renders the empty board, then steps the state machine until
    /// [`LoopState::GameOver`].
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Player, GameError> {
        info!("Game started");
        self.redraw()?;
        loop {
            if let Some(winner) = self.step()? {
                return Ok(winner);
            }
        }
    }

    /// Advances the state machine by one transition.
    ///
    /// Returns the winner when the transition reaches or reports
    /// [`LoopState::GameOver`].
    #[instrument(skip(self), fields(phase = ?self.state.phase))]
    pub fn step(&mut self) -> Result<Option<Player>, GameError> {
        match self.state.phase {
            LoopState::AwaitingMove => {
                self.accept_move()?;
                Ok(None)
            }
            LoopState::MoveAccepted(action) => {
                self.redraw()?;
                match evaluate(&self.state.board, action.row, action.column) {
                    GameResult::Won(winner) => {
                        info!(%winner, "Line completed");
                        self.state.phase = LoopState::GameOver(winner);
                        writeln!(self.output, "The winner is... {}!", winner)?;
                        self.output.flush()?;
                        Ok(Some(winner))
                    }
                    GameResult::InProgress => {
                        self.state.phase = LoopState::AwaitingMove;
                        Ok(None)
                    }
                }
            }
            LoopState::GameOver(winner) => Ok(Some(winner)),
        }
    }

    /// Prompts for symbol, row and column until a move lands on an empty
    /// square.
    fn accept_move(&mut self) -> Result<(), GameError> {
        loop {
            let player = self.prompt_field(Field::Symbol, parse_symbol)?;
            let row = self.prompt_field(Field::Row, parse_coordinate)?;
            let column = self.prompt_field(Field::Column, parse_coordinate)?;

            let action = Move::new(player, row, column);
            match self.state.apply(action) {
                Ok(()) => {
                    debug!(%action, "Move accepted");
                    return Ok(());
                }
                Err(MoveError::Board(err @ BoardError::CellOccupied { .. })) => {
                    debug!(%err, "Move rejected");
                    writeln!(self.output, "{}", SLOT_FILLED)?;
                }
                Err(MoveError::Board(err @ BoardError::OutOfRange { .. })) => {
                    // Parsers only yield in-range coordinates.
                    warn!(%err, "Move rejected");
                    writeln!(self.output, "{}", err)?;
                }
                Err(err @ MoveError::GameOver(_)) => {
                    // Only reachable if stepped past GameOver; the phase is kept.
                    warn!(%err, "Move rejected");
                    return Ok(());
                }
            }
        }
    }

    /// Shows `field`'s prompt and re-prompts until `parse` accepts a line.
    fn prompt_field<T>(
        &mut self,
        field: Field,
        parse: fn(&str) -> Result<T, InputError>,
    ) -> Result<T, GameError> {
        write!(self.output, "{}", field.prompt())?;
        self.output.flush()?;

        loop {
            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(%field, %err, "Input rejected");
                    write!(self.output, "{}", field.retry_prompt())?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Reads one line without its line terminator.
    ///
    /// Bytes that are not UTF-8 decode to U+FFFD, which no parser accepts,
    /// so the field is re-prompted instead of failing the game.
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            warn!("Input closed");
            return Err(GameError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Clears the screen (if enabled) and renders the board.
    fn redraw(&mut self) -> Result<(), GameError> {
        if *self.settings.clear_screen() {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        let rendered = self.state.board.render_with(*self.settings.color());
        write!(self.output, "{}", rendered)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet() -> GameSettings {
        GameSettings::new().with_clear_screen(false)
    }

    fn game(input: &str) -> GameLoop<Cursor<Vec<u8>>, Vec<u8>> {
        GameLoop::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), quiet())
    }

    fn output(game: &GameLoop<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(game.output()).into_owned()
    }

    #[test]
    fn test_apply_rejects_occupied_without_changes() {
        let mut state = GameState::new();
        state.apply(Move::new(Player::X, 0, 0)).unwrap();
        state.phase = LoopState::AwaitingMove;
        let before = state.clone();

        let result = state.apply(Move::new(Player::O, 0, 0));
        assert!(matches!(
            result,
            Err(MoveError::Board(BoardError::CellOccupied { .. }))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_finished_game_accepts_no_moves() {
        let mut state = GameState::new();
        state.phase = LoopState::GameOver(Player::O);
        let before = state.clone();

        let result = state.apply(Move::new(Player::X, 2, 2));
        assert_eq!(result, Err(MoveError::GameOver(Player::O)));
        assert_eq!(state, before);
        assert_eq!(state.winner(), Some(Player::O));
    }

    #[test]
    fn test_invalid_utf8_is_reprompted() {
        let mut game = GameLoop::new(
            Cursor::new(b"\xff\nO\n1\n1\n".to_vec()),
            Vec::new(),
            quiet(),
        );
        game.step().unwrap();
        assert!(output(&game).starts_with("Insert X or O: Invalid input. Insert X or O: "));
        assert_eq!(
            *game.state().phase(),
            LoopState::MoveAccepted(Move::new(Player::O, 0, 0))
        );
    }

    #[test]
    fn test_step_walks_through_phases() {
        let mut game = game("X\n2\n2\n");
        assert_eq!(*game.state().phase(), LoopState::AwaitingMove);

        assert_eq!(game.step().unwrap(), None);
        assert_eq!(
            *game.state().phase(),
            LoopState::MoveAccepted(Move::new(Player::X, 1, 1))
        );

        assert_eq!(game.step().unwrap(), None);
        assert_eq!(*game.state().phase(), LoopState::AwaitingMove);
    }

    #[test]
    fn test_prompts_in_order() {
        let mut game = game("O\n3\n1\n");
        game.step().unwrap();
        assert_eq!(
            output(&game),
            "Insert X or O: Insert the row: Insert the column: "
        );
    }

    #[test]
    fn test_invalid_fields_reprompt_individually() {
        let mut game = game("x\nX\n0\n2\nfoo\n4\n3\n");
        game.step().unwrap();
        let text = output(&game);
        assert_eq!(
            text,
            "Insert X or O: Invalid input. Insert X or O: \
             Insert the row: Invalid input. Insert the row (1, 2, or 3): \
             Insert the column: Invalid input. Insert the column (1, 2, or 3): \
             Invalid input. Insert the column (1, 2, or 3): "
        );
        assert_eq!(
            *game.state().phase(),
            LoopState::MoveAccepted(Move::new(Player::X, 1, 2))
        );
    }

    #[test]
    fn test_windows_line_endings() {
        let mut game = game("O\r\n1\r\n1\r\n");
        game.step().unwrap();
        assert_eq!(
            *game.state().phase(),
            LoopState::MoveAccepted(Move::new(Player::O, 0, 0))
        );
    }

    #[test]
    fn test_eof_is_reported() {
        let mut game = game("X\n1\n");
        assert!(matches!(game.step(), Err(GameError::InputClosed)));
        assert_eq!(*game.state().phase(), LoopState::AwaitingMove);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut game = game("X\n1\n1\nX\n1\n2\nX\n1\n3\n");
        assert_eq!(game.run().unwrap(), Player::X);
        assert_eq!(game.state().winner(), Some(Player::X));
        assert_eq!(game.step().unwrap(), Some(Player::X));
    }
}
