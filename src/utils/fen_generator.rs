//! Position-to-FEN rendering for the oracle boundary.
//!
//! The core tracks no halfmove or fullmove counters, so those fields are
//! emitted as `0 1`.

use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = generate_en_passant_field(position.en_passant_target);

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            let square = Square::from_parts(row, col);
            if let Some(piece) = position.piece_at(square) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(target: Option<Square>) -> String {
    match target {
        Some(square) => square_to_algebraic(square),
        None => "-".to_owned(),
    }
}
