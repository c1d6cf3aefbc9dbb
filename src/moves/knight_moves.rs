//! Pseudo-legal knight destinations.

use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.piece_at(to) {
            Some(target) if target.color == piece.color => {}
            _ => out.push(to),
        }
    }
}
