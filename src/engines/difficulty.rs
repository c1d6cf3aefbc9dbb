//! Difficulty tier selection.
//!
//! Tiers form a closed enumeration mapped at compile time to their strategy
//! implementations; unrecognized names are resolved defensively to Easy at
//! the boundary instead of reaching a runtime lookup table.

use crate::engines::engine_capture::CaptureFirstEngine;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_oracle::OracleEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;

/// Search depth of the Complex tier.
pub const COMPLEX_SEARCH_DEPTH: u8 = 3;

/// Fallback depth of the Impossible tier, one ply deeper than Complex.
pub const IMPOSSIBLE_FALLBACK_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Naive,
    Normal,
    Complex,
    Impossible,
}

impl Difficulty {
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Naive => "naive",
            Difficulty::Normal => "normal",
            Difficulty::Complex => "complex",
            Difficulty::Impossible => "impossible",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "naive" => Some(Difficulty::Naive),
            "normal" => Some(Difficulty::Normal),
            "complex" => Some(Difficulty::Complex),
            "impossible" => Some(Difficulty::Impossible),
            _ => None,
        }
    }

    /// Defensive resolution for boundary input: unknown names fall back to
    /// Easy.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Difficulty::Easy)
    }
}

pub fn build_engine(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::new()),
        Difficulty::Naive => Box::new(CaptureFirstEngine::new()),
        Difficulty::Normal => Box::new(GreedyEngine::new()),
        Difficulty::Complex => Box::new(MinimaxEngine::new(COMPLEX_SEARCH_DEPTH)),
        Difficulty::Impossible => Box::new(OracleEngine::new(IMPOSSIBLE_FALLBACK_DEPTH)),
    }
}
