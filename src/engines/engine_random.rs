//! Easy-tier random-move engine.
//!
//! Selects uniformly from legal moves and is also used for diagnostics and
//! integration testing.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        _params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let moves = legal_moves(position).map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", moves.len()));

        if moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn picks_some_legal_move_from_the_start_position() {
        let position = Position::new_game();
        let legal = legal_moves(&position).expect("legal moves should generate");

        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&position, &SearchParams::default())
            .expect("engine should choose a move");

        let picked = out.best_move.expect("start position has moves");
        assert!(legal.contains(&picked));
    }

    #[test]
    fn reports_no_move_when_checkmated() {
        let position = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&position, &SearchParams::default())
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
    }
}
