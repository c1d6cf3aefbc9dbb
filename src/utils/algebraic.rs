//! Conversions between board squares and two-character algebraic
//! coordinates.
//!
//! Row 0 is rank 8 and column 0 is file 'a', so `a8` maps to (0, 0) and
//! `h1` to (7, 7). Rendering is total over valid squares; parsing rejects
//! malformed text with a format error.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col() as u8);
    let rank = char::from(b'8' - square.row() as u8);
    format!("{file}{rank}")
}

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Square::try_new(row, col)
}
