//! Errors used throughout the chess engine core.
//!
//! This module defines the canonical error type returned by parsing
//! utilities, move application, and the legality pipeline. The enum
//! `ChessError` is used as the single error type across the crate to
//! simplify propagation and matching.
//!
//! Usage guidelines:
//! - Functions return `Result<..., ChessError>` only for programmer-error
//!   class failures (malformed coordinate text, out-of-range square
//!   construction, applying a move from an empty square, malformed boundary
//!   records).
//! - Game-logic dead ends (check, checkmate, stalemate, an unavailable
//!   oracle) are ordinary return values, never errors; callers branch on
//!   those values instead of matching here.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the engine core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate string (for example `"e4"`) failed to parse.
    ///
    /// Payload: the offending text.
    InvalidAlgebraicSquare(String),

    /// Square construction was attempted with coordinates off the board.
    ///
    /// Payload: (row, col) as supplied by the caller.
    SquareOutOfBounds { row: i8, col: i8 },

    /// A move was applied whose source square holds no piece.
    NoPieceOnSquare(Square),

    /// A persistence snapshot record could not be converted to a position.
    InvalidSnapshot(String),

    /// A FEN string could not be parsed.
    InvalidFen(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
            ChessError::SquareOutOfBounds { row, col } => {
                write!(f, "square coordinates out of bounds: ({row}, {col})")
            }
            ChessError::NoPieceOnSquare(square) => {
                write!(f, "no piece on square {}", square_to_algebraic(*square))
            }
            ChessError::InvalidSnapshot(msg) => write!(f, "invalid position snapshot: {msg}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
        }
    }
}

impl Error for ChessError {}

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn display_names_the_offending_square() {
        let square = Square::try_new(7, 4).expect("e1 coordinates should be in bounds");
        let message = ChessError::NoPieceOnSquare(square).to_string();
        assert!(message.contains("e1"), "message was: {message}");
    }

    #[test]
    fn display_reports_out_of_bounds_coordinates() {
        let message = ChessError::SquareOutOfBounds { row: 9, col: -1 }.to_string();
        assert!(message.contains("(9, -1)"), "message was: {message}");
    }
}
