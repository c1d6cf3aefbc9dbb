//! Move-path enumeration for validating the legal move pipeline.
//!
//! Counts leaf nodes of the legal-move tree to a fixed depth; the counts
//! for well-known positions are the acceptance gate for the whole
//! generate-apply-filter stack.

use crate::chess_errors::ChessResult;
use crate::game_state::position::Position;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

pub fn perft(position: &Position, depth: u8) -> ChessResult<usize> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(position)?;
    if depth == 1 {
        return Ok(moves.len());
    }

    let mut nodes = 0usize;
    for mv in moves {
        let next = apply_move(position, mv)?;
        nodes += perft(&next, depth - 1)?;
    }

    Ok(nodes)
}
