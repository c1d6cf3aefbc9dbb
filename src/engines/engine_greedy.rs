//! Normal-tier one-ply greedy engine.
//!
//! Applies every legal move, scores the successor with the material scorer
//! from the mover's perspective, and keeps the best. Ties are broken by
//! replacing the incumbent with 10% probability, so equal-looking moves
//! vary between games instead of always falling on the first generated.

use rand::RngExt;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::apply_move::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

pub struct GreedyEngine {
    scorer: MaterialScorer,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            scorer: MaterialScorer,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        _params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let moves = legal_moves(position).map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string greedy_engine legal_moves {}", moves.len()));

        if moves.is_empty() {
            return Ok(out);
        }

        let mover = position.side_to_move;
        let mut rng = rand::rng();
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mv in moves {
            let next = apply_move(position, mv).map_err(|e| e.to_string())?;
            let raw = self.scorer.score(&next);
            let score = match mover {
                Color::White => raw,
                Color::Black => -raw,
            };

            if score > best_score || (score == best_score && rng.random_bool(0.1)) {
                best_score = score;
                best_move = Some(mv);
            }
        }

        out.info_lines
            .push(format!("info string greedy_engine best_score {best_score}"));
        out.best_move = best_move;
        Ok(out)
    }
}
