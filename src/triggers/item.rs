//! P-items: passive items that fire at fixed points of a turn.

use serde::{Deserialize, Serialize};

use crate::cards::PLACEHOLDER_ART;
use crate::core::GameState;
use crate::effects::{Condition, Effect};

/// When a P-item is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerPoint {
    /// After the turn event, before the turn's draw.
    TurnStart,
    /// After each successfully played card.
    AfterAction,
}

impl std::fmt::Display for TriggerPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerPoint::TurnStart => write!(f, "turn_start"),
            TriggerPoint::AfterAction => write!(f, "after_action"),
        }
    }
}

/// A passive item with a trigger point, a condition, and an effect.
///
/// Single-use items latch `used` the first time they fire and never fire
/// again.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PItem {
    pub name: String,
    pub description: String,
    pub trigger: TriggerPoint,
    pub condition: Condition,
    pub effect: Effect,
    pub once: bool,
    pub used: bool,
    pub art: String,
}

impl PItem {
    /// Create a single-use item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        trigger: TriggerPoint,
        condition: Condition,
        effect: Effect,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            trigger,
            condition,
            effect,
            once: true,
            used: false,
            art: PLACEHOLDER_ART.to_string(),
        }
    }

    /// Allow the item to fire every time its condition holds.
    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.once = false;
        self
    }

    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }

    /// Check if the item can still fire at all.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.once && self.used
    }

    /// Evaluate the condition and fire the effect if it holds.
    ///
    /// Returns true when the item fired.
    pub fn check(&mut self, state: &mut GameState) -> bool {
        if self.is_spent() || !self.condition.evaluate(state) {
            return false;
        }
        self.effect.apply(state);
        if self.once {
            self.used = true;
        }
        tracing::debug!(item = %self.name, trigger = %self.trigger, turn = state.turn, "p-item fired");
        state.log.push(format!("P-item '{}' triggered", self.name));
        true
    }
}
