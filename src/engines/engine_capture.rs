//! Naive-tier capture-preferring engine.
//!
//! Picks uniformly among capturing moves (ordinary captures and en
//! passant); with no capture on the board it falls back to a uniform choice
//! among all legal moves.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::chess_types::{Move, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct CaptureFirstEngine;

impl CaptureFirstEngine {
    pub fn new() -> Self {
        Self
    }

    /// A move captures when its destination is occupied by the enemy, or
    /// when a pawn steps onto the recorded en-passant target.
    fn is_capture(position: &Position, mv: Move) -> bool {
        if position.piece_at(mv.to).is_some() {
            return true;
        }
        position.en_passant_target == Some(mv.to)
            && position
                .piece_at(mv.from)
                .is_some_and(|piece| piece.kind == PieceKind::Pawn)
    }
}

impl Default for CaptureFirstEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for CaptureFirstEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        _params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let moves = legal_moves(position).map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string capture_engine legal_moves {}", moves.len()));

        if moves.is_empty() {
            return Ok(out);
        }

        let captures: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| Self::is_capture(position, *mv))
            .collect();
        out.info_lines
            .push(format!("info string capture_engine captures {}", captures.len()));

        let pool = if captures.is_empty() { &moves } else { &captures };

        let mut rng = rand::rng();
        let picked = pool
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a capture-first move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
