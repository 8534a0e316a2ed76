//! Parsing of the three per-turn prompts.
//!
//! Each parser is a pure function from one line of input to a value or an
//! [`InputError`]. The game loop owns the retry policy.

use super::Player;
use super::types::BOARD_SIZE;
use tracing::instrument;

/// One of the three values requested every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Field {
    /// The mark to place.
    Symbol,
    /// The 1-indexed row.
    Row,
    /// The 1-indexed column.
    Column,
}

impl Field {
    /// Initial prompt for this field.
    pub fn prompt(self) -> &'static str {
        match self {
            Field::Symbol => "Insert X or O: ",
            Field::Row => "Insert the row: ",
            Field::Column => "Insert the column: ",
        }
    }

    /// Prompt shown after a rejected value.
    pub fn retry_prompt(self) -> &'static str {
        match self {
            Field::Symbol => "Invalid input. Insert X or O: ",
            Field::Row => "Invalid input. Insert the row (1, 2, or 3): ",
            Field::Column => "Invalid input. Insert the column (1, 2, or 3): ",
        }
    }
}

/// Rejected prompt input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Input is not exactly one character.
    #[display("Expected a single character, got {:?}", _0)]
    UnparsableSymbol(String),

    /// A single character other than `X` or `O`.
    #[display("Symbol {:?} is not X or O", _0)]
    SymbolOutOfSet(char),

    /// Input is not an integer.
    #[display("Expected a number, got {:?}", _0)]
    UnparsableCoordinate(String),

    /// An integer outside `1..=3`.
    #[display("Coordinate {} is not 1, 2, or 3", _0)]
    CoordinateOutOfRange(i64),
}

impl std::error::Error for InputError {}

/// Parses a mark. Exactly `X` or `O`, case-sensitive, no padding.
#[instrument]
pub fn parse_symbol(input: &str) -> Result<Player, InputError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some('X'), None) => Ok(Player::X),
        (Some('O'), None) => Ok(Player::O),
        (Some(other), None) => Err(InputError::SymbolOutOfSet(other)),
        _ => Err(InputError::UnparsableSymbol(input.to_string())),
    }
}

/// Parses a 1-indexed coordinate and returns it 0-indexed.
///
/// Surrounding ASCII whitespace and a leading sign are accepted.
#[instrument]
pub fn parse_coordinate(input: &str) -> Result<usize, InputError> {
    let value: i64 = input
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse()
        .map_err(|_| InputError::UnparsableCoordinate(input.to_string()))?;

    match usize::try_from(value) {
        Ok(one_based @ 1..=BOARD_SIZE) => Ok(one_based - 1),
        _ => Err(InputError::CoordinateOutOfRange(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_accepts_x_and_o() {
        assert_eq!(parse_symbol("X"), Ok(Player::X));
        assert_eq!(parse_symbol("O"), Ok(Player::O));
    }

    #[test]
    fn test_symbol_is_case_sensitive() {
        assert_eq!(parse_symbol("x"), Err(InputError::SymbolOutOfSet('x')));
        assert_eq!(parse_symbol("o"), Err(InputError::SymbolOutOfSet('o')));
    }

    #[test]
    fn test_symbol_rejects_other_characters() {
        for c in ['0', 'Y', ' ', '?'] {
            assert_eq!(
                parse_symbol(&c.to_string()),
                Err(InputError::SymbolOutOfSet(c))
            );
        }
    }

    #[test]
    fn test_symbol_requires_single_character() {
        assert!(matches!(parse_symbol(""), Err(InputError::UnparsableSymbol(_))));
        assert!(matches!(parse_symbol("XO"), Err(InputError::UnparsableSymbol(_))));
        assert!(matches!(parse_symbol("X "), Err(InputError::UnparsableSymbol(_))));
    }

    #[test]
    fn test_coordinate_accepts_one_to_three() {
        assert_eq!(parse_coordinate("1"), Ok(0));
        assert_eq!(parse_coordinate("2"), Ok(1));
        assert_eq!(parse_coordinate("3"), Ok(2));
        assert_eq!(parse_coordinate(" 3 "), Ok(2));
        assert_eq!(parse_coordinate("+2"), Ok(1));
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        for value in [0, -1, -3, 4, 10, i64::MAX] {
            assert_eq!(
                parse_coordinate(&value.to_string()),
                Err(InputError::CoordinateOutOfRange(value))
            );
        }
    }

    #[test]
    fn test_coordinate_rejects_non_numbers() {
        for input in ["", "one", "1.0", "1 2", "X", "\u{a0}2", "3\u{3000}", "\u{fffd}"] {
            assert!(matches!(
                parse_coordinate(input),
                Err(InputError::UnparsableCoordinate(_))
            ));
        }
    }

    #[test]
    fn test_retry_prompts_differ_from_prompts() {
        for field in <Field as strum::IntoEnumIterator>::iter() {
            assert!(field.retry_prompt().starts_with("Invalid input. "));
            assert_ne!(field.prompt(), field.retry_prompt());
        }
    }
}
