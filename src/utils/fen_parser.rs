//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a six-field Forsyth-Edwards
//! string. The halfmove and fullmove fields are validated but discarded,
//! since the core does not track them.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::empty();

    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_target = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(position)
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidFen(msg.to_owned())
}

fn parse_board(board_part: &str, position: &mut Position) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            position.set_piece(Square::from_parts(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part).map(Some)
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
