//! Plain snapshot record exchanged with the persistence layer.
//!
//! A `PositionSnapshot` is the minimal FEN-like encoding without move
//! counters: eight rank strings (row 0 = rank 8, '.' for empty, uppercase
//! White, lowercase Black), a side-to-move flag, the four castling-rights
//! flags, and an optional (row, col) en-passant square. The owning
//! application serializes this record however it likes; the core only
//! converts it to and from a `Position`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{CastlingRights, Color, Square};
use crate::game_state::position::Position;
use crate::utils::fen_generator::piece_to_fen_char;
use crate::utils::fen_parser::piece_from_fen_char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    /// Eight 8-character rank strings, row 0 = rank 8.
    pub ranks: [String; 8],
    pub white_to_move: bool,
    pub castling: CastlingRights,
    /// (row, col) of the en-passant target, if any.
    pub en_passant: Option<(u8, u8)>,
}

pub fn snapshot_position(position: &Position) -> PositionSnapshot {
    let ranks = std::array::from_fn(|row| {
        (0..8u8)
            .map(|col| {
                let square = Square::from_parts(row as u8, col);
                match position.piece_at(square) {
                    Some(piece) => piece_to_fen_char(piece),
                    None => '.',
                }
            })
            .collect()
    });

    PositionSnapshot {
        ranks,
        white_to_move: position.side_to_move == Color::White,
        castling: position.castling_rights,
        en_passant: position
            .en_passant_target
            .map(|sq| (sq.row() as u8, sq.col() as u8)),
    }
}

pub fn position_from_snapshot(snapshot: &PositionSnapshot) -> ChessResult<Position> {
    let mut position = Position::empty();

    for (row, rank) in snapshot.ranks.iter().enumerate() {
        let cells: Vec<char> = rank.chars().collect();
        if cells.len() != 8 {
            return Err(ChessError::InvalidSnapshot(format!(
                "rank {row} has {} cells, expected 8",
                cells.len()
            )));
        }

        for (col, ch) in cells.iter().enumerate() {
            if *ch == '.' {
                continue;
            }
            let piece = piece_from_fen_char(*ch).ok_or_else(|| {
                ChessError::InvalidSnapshot(format!("invalid piece character '{ch}'"))
            })?;
            position.set_piece(Square::from_parts(row as u8, col as u8), Some(piece));
        }
    }

    position.side_to_move = if snapshot.white_to_move {
        Color::White
    } else {
        Color::Black
    };
    position.castling_rights = snapshot.castling;
    position.en_passant_target = match snapshot.en_passant {
        Some((row, col)) => Some(Square::try_new(row as i8, col as i8)?),
        None => None,
    };

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::{position_from_snapshot, snapshot_position};
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_round_trips_through_the_snapshot() {
        let position = Position::new_game();
        let snapshot = snapshot_position(&position);

        assert_eq!(snapshot.ranks[0], "rnbqkbnr");
        assert_eq!(snapshot.ranks[4], "........");
        assert_eq!(snapshot.ranks[7], "RNBQKBNR");
        assert!(snapshot.white_to_move);

        let rebuilt = position_from_snapshot(&snapshot).expect("snapshot should convert back");
        assert_eq!(rebuilt, position);
    }

    #[test]
    fn en_passant_coordinates_survive_the_round_trip() {
        let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        let snapshot = snapshot_position(&position);
        assert_eq!(snapshot.en_passant, Some((5, 4)));
        assert!(!snapshot.white_to_move);

        let rebuilt = position_from_snapshot(&snapshot).expect("snapshot should convert back");
        assert_eq!(rebuilt, position);
    }

    #[test]
    fn malformed_ranks_and_coordinates_are_rejected() {
        let position = Position::new_game();

        let mut short_rank = snapshot_position(&position);
        short_rank.ranks[3] = ".......".to_owned();
        assert!(position_from_snapshot(&short_rank).is_err());

        let mut bad_piece = snapshot_position(&position);
        bad_piece.ranks[3] = "...x....".to_owned();
        assert!(position_from_snapshot(&bad_piece).is_err());

        let mut bad_square = snapshot_position(&position);
        bad_square.en_passant = Some((8, 0));
        assert!(position_from_snapshot(&bad_square).is_err());
    }
}
