//! Engine abstraction layer shared by every difficulty tier.
//!
//! Defines common input parameters and output payloads so the different
//! move-selection strategies can be driven behind a single trait interface.

use crate::game_state::chess_types::Move;
use crate::game_state::position::Position;

/// Per-request overrides. `depth` bounds search-based engines; `movetime_ms`
/// is the thinking budget handed to the external oracle.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` means no legal move is available (mate or stalemate).
    pub best_move: Option<Move>,
    /// UCI-style diagnostics lines; the embedding layer may print or drop
    /// them.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        position: &Position,
        params: &SearchParams,
    ) -> Result<EngineOutput, String>;
}
