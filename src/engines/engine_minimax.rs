//! Complex-tier fixed-depth minimax engine.
//!
//! Wraps the core alpha-beta search with a configured default depth and
//! material scoring. An explicit depth in `SearchParams` takes precedence
//! over the configured default.

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::position::Position;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::minimax;

pub struct MinimaxEngine {
    default_depth: u8,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            scorer: MaterialScorer,
        }
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);

        let outcome = minimax(position, depth, &self.scorer).map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.best_move = outcome.best_move;
        out.info_lines
            .push(format!("info depth {depth} score cp {}", outcome.score));
        out.info_lines.push(format!(
            "info string minimax_engine default_depth {}",
            self.default_depth
        ));
        Ok(out)
    }
}
