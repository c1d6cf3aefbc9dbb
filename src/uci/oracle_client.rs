//! Client for an external UCI engine used as a best-move oracle.
//!
//! Sends the current position and a thinking budget to an external process
//! speaking the line-oriented best-move protocol, and parses the reply.
//! Every failure mode (missing executable, spawn failure, I/O error,
//! malformed reply) yields `None`; the caller falls back to its own search.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use crate::game_state::chess_types::{Move, PieceKind};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_fen;

pub const DEFAULT_ORACLE_COMMAND: &str = "stockfish";

pub fn query_best_move(position: &Position, movetime_ms: u64) -> Option<Move> {
    query_best_move_with_command(DEFAULT_ORACLE_COMMAND, position, movetime_ms)
}

pub fn query_best_move_with_command(
    command: &str,
    position: &Position,
    movetime_ms: u64,
) -> Option<Move> {
    let mut child = Command::new(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    let best_move = exchange_best_move(&mut child, position, movetime_ms);

    if let Some(stdin) = child.stdin.as_mut() {
        let _ = writeln!(stdin, "quit");
    }
    let _ = child.kill();
    let _ = child.wait();

    best_move
}

fn exchange_best_move(child: &mut Child, position: &Position, movetime_ms: u64) -> Option<Move> {
    {
        let stdin = child.stdin.as_mut()?;
        writeln!(stdin, "position fen {}", generate_fen(position)).ok()?;
        writeln!(stdin, "go movetime {movetime_ms}").ok()?;
        stdin.flush().ok()?;
    }

    let stdout = child.stdout.take()?;
    let reader = BufReader::new(stdout);

    for line in reader.lines() {
        let line = line.ok()?;
        if let Some(rest) = line.trim().strip_prefix("bestmove") {
            let token = rest.split_whitespace().next()?;
            return parse_best_move_token(token);
        }
    }

    None
}

/// Parses `<from><to>[promotion]` coordinate tokens such as `e2e4` or
/// `e7e8q`. Null-move and placeholder tokens fail the square parse and
/// therefore yield `None`.
pub fn parse_best_move_token(token: &str) -> Option<Move> {
    let from = algebraic_to_square(token.get(0..2)?).ok()?;
    let to = algebraic_to_square(token.get(2..4)?).ok()?;

    let promotion = match token.get(4..5) {
        Some(letter) => Some(promotion_kind(letter)?),
        None => None,
    };

    Some(Move {
        from,
        to,
        promotion,
    })
}

fn promotion_kind(letter: &str) -> Option<PieceKind> {
    match letter {
        "q" => Some(PieceKind::Queen),
        "r" => Some(PieceKind::Rook),
        "b" => Some(PieceKind::Bishop),
        "n" => Some(PieceKind::Knight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_best_move_token, query_best_move_with_command};
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::position::Position;

    #[test]
    fn parses_a_plain_coordinate_move() {
        let mv = parse_best_move_token("e2e4").expect("token should parse");
        assert_eq!(mv.from, Square::try_new(6, 4).expect("e2 should construct"));
        assert_eq!(mv.to, Square::try_new(4, 4).expect("e4 should construct"));
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn parses_a_promotion_suffix() {
        let mv = parse_best_move_token("e7e8q").expect("token should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));

        let under = parse_best_move_token("a2a1n").expect("token should parse");
        assert_eq!(under.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn rejects_null_moves_and_malformed_tokens() {
        for token in ["", "e2", "0000", "(none)", "e2e9", "e2e4x", "i1a1"] {
            assert!(parse_best_move_token(token).is_none(), "accepted {token:?}");
        }
    }

    #[test]
    fn missing_executable_degrades_to_none() {
        let position = Position::new_game();
        let result = query_best_move_with_command("quince-chess-no-such-engine", &position, 10);
        assert_eq!(result, None);
    }
}
