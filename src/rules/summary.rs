//! Post-session summary.

use serde::{Deserialize, Serialize};

use super::scoring::rank;
use crate::core::{GameState, MAX_TURNS};

/// Final numbers of a playthrough, for a result screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub character: String,
    pub score: i64,
    pub rank: i64,
    pub turns_played: u32,
    pub cards_played: usize,
    pub cards_exiled: usize,
    pub hp: i64,
    pub seed: u64,
}

impl GameState {
    /// Summarize the session as it stands.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            character: self.character.clone(),
            score: self.resources.score,
            rank: rank(self.resources.score),
            turns_played: self.turn.saturating_sub(1).min(MAX_TURNS),
            cards_played: self.history.len(),
            cards_exiled: self.piles.exile.len(),
            hp: self.resources.hp,
            seed: self.seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::blank_state;

    #[test]
    fn test_summary_of_finished_session() {
        let mut state = blank_state();
        state.turn = MAX_TURNS + 1;
        state.resources.score = 40000;

        let summary = state.summary();

        assert_eq!(summary.turns_played, 12);
        assert_eq!(summary.rank, 13407);
        assert_eq!(summary.cards_played, 0);
        assert_eq!(summary.seed, 42);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = blank_state().summary();
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
