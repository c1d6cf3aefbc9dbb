//! King-attack detection by outward scan from the king square.
//!
//! Probes the two squares an enemy pawn would attack from, the knight
//! offsets, and the eight rays (nearest occupied square only), with an
//! enemy king counting at distance one. A missing king reports check, which
//! makes legal-move enumeration find no escape and lets the game terminate
//! instead of crashing on a corrupted board.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Locates the king of `color`, if present.
pub fn find_king(position: &Position, color: Color) -> Option<Square> {
    Square::all().find(|sq| position.piece_at(*sq) == Some(Piece::new(color, PieceKind::King)))
}

/// Whether `color`'s king is currently attacked. Absent king counts as
/// attacked.
pub fn in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = find_king(position, color) else {
        return true;
    };
    let enemy = color.opposite();

    // Enemy pawns attack toward their own moving direction, so the attacker
    // sits one row against that direction from the king.
    let pawn_row = -enemy.pawn_row_step();
    for d_col in [-1i8, 1] {
        if let Some(sq) = king_sq.offset(pawn_row, d_col) {
            if position.piece_at(sq) == Some(Piece::new(enemy, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(sq) = king_sq.offset(d_row, d_col) {
            if position.piece_at(sq) == Some(Piece::new(enemy, PieceKind::Knight)) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &ROOK_DIRECTIONS {
        if ray_hits_attacker(position, king_sq, d_row, d_col, enemy, PieceKind::Rook) {
            return true;
        }
    }
    for &(d_row, d_col) in &BISHOP_DIRECTIONS {
        if ray_hits_attacker(position, king_sq, d_row, d_col, enemy, PieceKind::Bishop) {
            return true;
        }
    }

    false
}

/// Walks one ray to the nearest occupied square and tests it for the
/// matching enemy slider, an enemy queen, or (at distance one) the enemy
/// king.
fn ray_hits_attacker(
    position: &Position,
    from: Square,
    d_row: i8,
    d_col: i8,
    enemy: Color,
    slider: PieceKind,
) -> bool {
    let mut distance = 1u8;
    let mut current = from.offset(d_row, d_col);

    while let Some(square) = current {
        if let Some(piece) = position.piece_at(square) {
            return piece.color == enemy
                && (piece.kind == slider
                    || piece.kind == PieceKind::Queen
                    || (distance == 1 && piece.kind == PieceKind::King));
        }
        distance += 1;
        current = square.offset(d_row, d_col);
    }

    false
}
