//! Shared ray-casting for the sliding pieces.

use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

/// Walks each direction from `from`, collecting empty squares and stopping
/// at the first occupied one (included when it holds an enemy piece).
pub fn ray_destinations(
    position: &Position,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };

    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);
        while let Some(square) = current {
            match position.piece_at(square) {
                None => out.push(square),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(square);
                    }
                    break;
                }
            }
            current = square.offset(d_row, d_col);
        }
    }
}
