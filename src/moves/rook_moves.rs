use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::moves::sliding::ray_destinations;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn rook_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    ray_destinations(position, from, &ROOK_DIRECTIONS, out);
}
