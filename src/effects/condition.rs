//! Conditions over engine state.
//!
//! Conditions gate card usability and P-item triggers. They read the state
//! as it is at the moment of evaluation, including anything the current
//! action has already changed (the last played card's category, fresh
//! concentration).

use serde::{Deserialize, Serialize};

use crate::cards::CardCategory;
use crate::core::GameState;
use crate::resources::TempBuff;
use crate::schedule::Genre;

/// A predicate over the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Always true.
    Always,

    /// Current turn is at least N.
    TurnAtLeast(u32),

    /// Concentration is at least N.
    ConcentrationAtLeast(i64),

    /// The most recently played card had this category.
    LastCardWas(CardCategory),

    /// The current turn's schedule slot has this genre.
    GenreIs(Genre),

    /// The temporary buff has a positive counter.
    BuffActive(TempBuff),

    /// All conditions must be true.
    All(Vec<Condition>),

    /// At least one condition must be true.
    Any(Vec<Condition>),

    /// Condition must be false.
    Not(Box<Condition>),
}

impl Condition {
    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Create a NOT condition.
    #[allow(clippy::should_implement_trait)]
    pub fn not(condition: Condition) -> Self {
        Self::Not(Box::new(condition))
    }

    /// Evaluate against the current state.
    #[must_use]
    pub fn evaluate(&self, state: &GameState) -> bool {
        match self {
            Condition::Always => true,
            Condition::TurnAtLeast(turn) => state.turn >= *turn,
            Condition::ConcentrationAtLeast(min) => state.resources.concentration >= *min,
            Condition::LastCardWas(category) => state.last_card_category == Some(*category),
            Condition::GenreIs(genre) => state
                .current_turn_info()
                .is_some_and(|slot| slot.genre == *genre),
            Condition::BuffActive(buff) => state.buffs.is_active(*buff),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(state)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(state)),
            Condition::Not(condition) => !condition.evaluate(state),
        }
    }
}
