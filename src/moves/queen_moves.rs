//! Pseudo-legal queen destinations: the union of rook and bishop rays.

use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding::ray_destinations;

pub fn queen_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    ray_destinations(position, from, &BISHOP_DIRECTIONS, out);
    ray_destinations(position, from, &ROOK_DIRECTIONS, out);
}
