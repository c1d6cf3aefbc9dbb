//! Pure move application producing a successor position.
//!
//! The input position is never touched; the returned value carries every
//! side effect of the move: en-passant capture removal, castling rook
//! relocation, promotion, castling-rights and en-passant bookkeeping, and
//! the side-to-move flip.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{CastlingRights, Move, Piece, PieceKind, Square};
use crate::game_state::position::Position;

pub fn apply_move(position: &Position, mv: Move) -> ChessResult<Position> {
    let piece = position
        .piece_at(mv.from)
        .ok_or(ChessError::NoPieceOnSquare(mv.from))?;

    let mut next = position.clone();
    next.set_piece(mv.from, None);

    // En-passant capture: a pawn moving diagonally onto the recorded target
    // square while the destination itself is empty. The captured pawn sits
    // directly behind the destination, relative to the mover's direction.
    if piece.kind == PieceKind::Pawn
        && position.en_passant_target == Some(mv.to)
        && mv.from.col() != mv.to.col()
        && position.piece_at(mv.to).is_none()
    {
        if let Some(captured) = mv.to.offset(-piece.color.pawn_row_step(), 0) {
            next.set_piece(captured, None);
        }
    }

    // A king travelling two files is castling; the rook jumps from its
    // corner to the square the king crossed.
    if piece.kind == PieceKind::King && mv.from.col().abs_diff(mv.to.col()) == 2 {
        let row = mv.to.row() as u8;
        let (rook_from, rook_to) = if mv.to.col() > mv.from.col() {
            (Square::from_parts(row, 7), Square::from_parts(row, 5))
        } else {
            (Square::from_parts(row, 0), Square::from_parts(row, 3))
        };
        let rook = next.piece_at(rook_from);
        next.set_piece(rook_from, None);
        next.set_piece(rook_to, rook);
    }

    let placed = if piece.kind == PieceKind::Pawn && mv.to.row() == piece.color.promotion_row() {
        Piece::new(piece.color, mv.promotion.unwrap_or(PieceKind::Queen))
    } else {
        piece
    };
    next.set_piece(mv.to, Some(placed));

    update_castling_rights(&mut next.castling_rights, piece, mv);

    next.en_passant_target = if piece.kind == PieceKind::Pawn
        && mv.from.row().abs_diff(mv.to.row()) == 2
    {
        Some(Square::from_parts(
            ((mv.from.row() + mv.to.row()) / 2) as u8,
            mv.from.col() as u8,
        ))
    } else {
        None
    };

    next.side_to_move = position.side_to_move.opposite();

    Ok(next)
}

/// Moving the king forfeits both rights; touching an original rook corner
/// (either leaving it or capturing on it) forfeits that specific right.
fn update_castling_rights(rights: &mut CastlingRights, moving: Piece, mv: Move) {
    if moving.kind == PieceKind::King {
        rights.clear_for_color(moving.color);
    }

    for square in [mv.from, mv.to] {
        match (square.row(), square.col()) {
            (7, 0) => rights.white_queenside = false,
            (7, 7) => rights.white_kingside = false,
            (0, 0) => rights.black_queenside = false,
            (0, 7) => rights.black_kingside = false,
            _ => {}
        }
    }
}
