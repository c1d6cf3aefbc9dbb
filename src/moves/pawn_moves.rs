//! Pseudo-legal pawn destinations.
//!
//! Covers the single advance, the double advance from the home row, diagonal
//! captures, and the diagonal move onto the en-passant target square.

use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;

pub fn pawn_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };
    let step = piece.color.pawn_row_step();

    if let Some(one) = from.offset(step, 0) {
        if position.piece_at(one).is_none() {
            out.push(one);
            if from.row() == piece.color.pawn_start_row() {
                if let Some(two) = from.offset(2 * step, 0) {
                    if position.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(step, d_col) else {
            continue;
        };
        match position.piece_at(to) {
            Some(target) if target.color != piece.color => out.push(to),
            None if position.en_passant_target == Some(to) => out.push(to),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_destinations;
    use crate::game_state::chess_types::Square;
    use crate::game_state::position::Position;

    fn destinations(position: &Position, row: i8, col: i8) -> Vec<Square> {
        let from = Square::try_new(row, col).expect("test square should be in bounds");
        let mut out = Vec::new();
        pawn_destinations(position, from, &mut out);
        out
    }

    #[test]
    fn home_row_pawn_has_single_and_double_advance() {
        let position = Position::new_game();
        let out = destinations(&position, 6, 4); // e2
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn blocked_pawn_has_no_advance_at_all() {
        // White pawn e2, black rook e3 blocking even the single step.
        let position =
            Position::from_fen("4k3/8/8/8/8/4r3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let out = destinations(&position, 6, 4);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_but_not_straight_ahead() {
        // White pawn e4; black pawns d5 and e5.
        let position =
            Position::from_fen("4k3/8/8/3pp3/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let out = destinations(&position, 4, 4);
        let d5 = Square::try_new(3, 3).expect("d5 should construct");
        assert_eq!(out, vec![d5]);
    }

    #[test]
    fn pawn_may_move_onto_the_en_passant_target() {
        // Black just played d7d5; white pawn e5 may capture on d6.
        let position = Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("FEN should parse");
        let out = destinations(&position, 3, 4); // e5
        let d6 = Square::try_new(2, 3).expect("d6 should construct");
        assert!(out.contains(&d6));
    }
}
