use crate::game_state::chess_types::Square;
use crate::game_state::position::Position;
use crate::moves::sliding::ray_destinations;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    ray_destinations(position, from, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::bishop_destinations;
    use crate::game_state::chess_types::Square;
    use crate::game_state::position::Position;

    #[test]
    fn bishop_in_the_center_of_an_empty_board_reaches_thirteen_squares() {
        let position =
            Position::from_fen("4k3/8/8/3B4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let d5 = Square::try_new(3, 3).expect("d5 should construct");
        let mut out = Vec::new();
        bishop_destinations(&position, d5, &mut out);
        assert_eq!(out.len(), 13);
    }
}
