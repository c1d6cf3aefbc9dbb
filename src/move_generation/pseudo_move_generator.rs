//! Piece-wise pseudo-legal destination generation.
//!
//! Dispatches to the per-piece generators by the kind of piece on the query
//! square. Destinations ignore whether the move would leave the mover's own
//! king in check; the legality filter settles that by trial application.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// All geometrically reachable destinations for the piece on `from`; empty
/// when the square is empty.
pub fn pseudo_destinations(position: &Position, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(piece) = position.piece_at(from) else {
        return out;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(position, from, &mut out),
        PieceKind::Knight => knight_destinations(position, from, &mut out),
        PieceKind::Bishop => bishop_destinations(position, from, &mut out),
        PieceKind::Rook => rook_destinations(position, from, &mut out),
        PieceKind::Queen => queen_destinations(position, from, &mut out),
        PieceKind::King => king_destinations(position, from, &mut out),
    }

    out
}
