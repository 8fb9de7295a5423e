//! Effects that fire at each of the next N turn starts.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// A recurring effect with its remaining turn count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecurringEffect {
    pub remaining_turns: u32,
    pub effect: Effect,
    pub description: String,
}

impl RecurringEffect {
    #[must_use]
    pub fn new(turns: u32, effect: Effect, description: impl Into<String>) -> Self {
        Self {
            remaining_turns: turns,
            effect,
            description: description.into(),
        }
    }

    /// Count down one turn. Returns true while turns remain.
    pub fn tick(&mut self) -> bool {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
        self.remaining_turns > 0
    }
}
