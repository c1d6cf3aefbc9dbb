//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, trial-applies each
//! candidate, and discards the ones that leave the mover's own king in
//! check. Checkmate and stalemate are derived from the same pipeline.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Move, Square};
use crate::game_state::position::Position;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::check_detection::in_check;
use crate::move_generation::pseudo_move_generator::pseudo_destinations;

/// Every legal move for the side to move, in board-scan generation order.
/// Promotion kind is left unset; `apply_move` defaults it to a queen.
pub fn legal_moves(position: &Position) -> ChessResult<Vec<Move>> {
    let mover = position.side_to_move;
    let mut legal = Vec::with_capacity(64);

    for from in Square::all() {
        let Some(piece) = position.piece_at(from) else {
            continue;
        };
        if piece.color != mover {
            continue;
        }

        for to in pseudo_destinations(position, from) {
            let candidate = Move::new(from, to);
            let next = apply_move(position, candidate)?;
            // Illegal if the mover's own king is in check after the move.
            if in_check(&next, mover) {
                continue;
            }
            legal.push(candidate);
        }
    }

    Ok(legal)
}

/// Checkmate: the side to move is in check and has no legal reply.
pub fn is_checkmate(position: &Position) -> ChessResult<bool> {
    Ok(in_check(position, position.side_to_move) && legal_moves(position)?.is_empty())
}

/// Stalemate: the side to move is not in check yet has no legal move.
pub fn is_stalemate(position: &Position) -> ChessResult<bool> {
    Ok(!in_check(position, position.side_to_move) && legal_moves(position)?.is_empty())
}
