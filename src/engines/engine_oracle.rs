//! Impossible-tier engine: external oracle with a deep-search fallback.
//!
//! Hands the position to the external best-move oracle with a long thinking
//! budget. If the oracle is unavailable or answers nothing usable, the tier
//! silently degrades to a fixed-depth minimax one ply deeper than the
//! Complex tier.

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::position::Position;
use crate::uci::oracle_client::{query_best_move_with_command, DEFAULT_ORACLE_COMMAND};

pub const DEFAULT_THINK_TIME_MS: u64 = 150_000;

pub struct OracleEngine {
    command: String,
    think_time_ms: u64,
    fallback: MinimaxEngine,
}

impl OracleEngine {
    pub fn new(fallback_depth: u8) -> Self {
        Self::with_command(DEFAULT_ORACLE_COMMAND, fallback_depth)
    }

    pub fn with_command(command: &str, fallback_depth: u8) -> Self {
        Self {
            command: command.to_owned(),
            think_time_ms: DEFAULT_THINK_TIME_MS,
            fallback: MinimaxEngine::new(fallback_depth),
        }
    }
}

impl Engine for OracleEngine {
    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let budget = params.movetime_ms.unwrap_or(self.think_time_ms);

        if let Some(best_move) = query_best_move_with_command(&self.command, position, budget) {
            let mut out = EngineOutput::default();
            out.info_lines
                .push(format!("info string oracle_engine movetime_ms {budget}"));
            out.best_move = Some(best_move);
            return Ok(out);
        }

        let mut out = self.fallback.choose_move(position, params)?;
        out.info_lines
            .push("info string oracle_engine unavailable, minimax fallback used".to_owned());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::OracleEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::game_state::chess_types::{Move, Square};
    use crate::game_state::position::Position;

    fn sq(row: i8, col: i8) -> Square {
        Square::try_new(row, col).expect("test square should be in bounds")
    }

    #[test]
    fn falls_back_to_minimax_when_the_oracle_is_missing() {
        let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1")
            .expect("FEN should parse");
        let mut engine = OracleEngine::with_command("quince-chess-no-such-engine", 2);
        let out = engine
            .choose_move(&position, &SearchParams::default())
            .expect("engine should answer");

        assert_eq!(out.best_move, Some(Move::new(sq(7, 0), sq(0, 0))));
        let joined = out.info_lines.join("\n");
        assert!(joined.contains("fallback"), "info lines were: {joined}");
    }

    #[test]
    fn fallback_reports_no_move_when_checkmated() {
        let position = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        let mut engine = OracleEngine::with_command("quince-chess-no-such-engine", 2);
        let out = engine
            .choose_move(&position, &SearchParams::default())
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
    }
}
