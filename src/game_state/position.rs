//! Central position model.
//!
//! `Position` is the complete game-state snapshot consumed by move
//! generation and search: the 8x8 board, side to move, castling rights, and
//! the en-passant target. Positions are never mutated by the core; applying
//! a move produces a fresh value, which is what makes search-tree
//! backtracking safe without undo bookkeeping.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, Square};
use crate::utils::board_snapshot::{position_from_snapshot, snapshot_position, PositionSnapshot};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// `board[row][col]`, row 0 = rank 8 down to row 7 = rank 1.
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn could capture onto en passant, valid for one move only.
    pub en_passant_target: Option<Square>,
}

impl Position {
    /// An empty board with White to move and no rights; building block for
    /// parsers and fixtures.
    pub fn empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn from_snapshot(snapshot: &PositionSnapshot) -> ChessResult<Self> {
        position_from_snapshot(snapshot)
    }

    #[inline]
    pub fn to_snapshot(&self) -> PositionSnapshot {
        snapshot_position(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row()][square.col()]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row()][square.col()] = piece;
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn new_game_places_thirty_two_pieces() {
        let position = Position::new_game();
        let occupied = Square::all()
            .filter(|sq| position.piece_at(*sq).is_some())
            .count();
        assert_eq!(occupied, 32);
        assert_eq!(position.side_to_move, Color::White);
        assert!(position.castling_rights.kingside(Color::White));
        assert!(position.castling_rights.queenside(Color::Black));
        assert_eq!(position.en_passant_target, None);
    }

    #[test]
    fn new_game_puts_the_kings_on_their_home_squares() {
        let position = Position::new_game();
        let e1 = Square::try_new(7, 4).expect("e1 should construct");
        let e8 = Square::try_new(0, 4).expect("e8 should construct");

        let white_king = position.piece_at(e1).expect("e1 should be occupied");
        assert_eq!(white_king.color, Color::White);
        assert_eq!(white_king.kind, PieceKind::King);

        let black_king = position.piece_at(e8).expect("e8 should be occupied");
        assert_eq!(black_king.color, Color::Black);
        assert_eq!(black_king.kind, PieceKind::King);
    }

    #[test]
    fn fen_round_trip_preserves_the_starting_position() {
        let position = Position::new_game();
        assert_eq!(position.to_fen(), super::STARTING_POSITION_FEN);
    }
}
