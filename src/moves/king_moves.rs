//! Pseudo-legal king destinations, including castling candidates.
//!
//! Castling is emitted here purely from rights and empty intervening
//! squares; whether the king's destination is attacked is settled later by
//! the legality filter, like any other king move.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };

    for &(d_row, d_col) in &KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.piece_at(to) {
            Some(target) if target.color == piece.color => {}
            _ => out.push(to),
        }
    }

    castling_destinations(position, piece.color, out);
}

/// Castling candidate squares: rights still held and every square strictly
/// between king and rook empty. The rights invariant guarantees the king is
/// still on its home square whenever a flag is set.
fn castling_destinations(position: &Position, color: Color, out: &mut Vec<Square>) {
    let row = color.home_row() as u8;
    let empty = |col: u8| position.piece_at(Square::from_parts(row, col)).is_none();

    if position.castling_rights.kingside(color) && empty(5) && empty(6) {
        out.push(Square::from_parts(row, 6));
    }
    if position.castling_rights.queenside(color) && empty(1) && empty(2) && empty(3) {
        out.push(Square::from_parts(row, 2));
    }
}
