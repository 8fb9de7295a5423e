//! Turn-keyed reservations: extra draws and effects for a later turn start.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Draw counts and effects reserved for future turns.
///
/// Effects reserved for the same turn run in registration order. Each
/// reservation is consumed when its turn arrives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeferredSchedule {
    draw_reservations: FxHashMap<u32, u32>,
    reserved_effects: FxHashMap<u32, Vec<Effect>>,
}

impl DeferredSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` extra draws to `turn`.
    pub fn reserve_draw(&mut self, turn: u32, amount: u32) {
        *self.draw_reservations.entry(turn).or_default() += amount;
    }

    /// Queue an effect for `turn`.
    pub fn reserve_effect(&mut self, turn: u32, effect: Effect) {
        self.reserved_effects.entry(turn).or_default().push(effect);
    }

    /// Extra draws reserved for `turn`.
    #[must_use]
    pub fn reserved_draws(&self, turn: u32) -> u32 {
        self.draw_reservations.get(&turn).copied().unwrap_or(0)
    }

    /// Effects queued for `turn`, in registration order.
    #[must_use]
    pub fn reserved_effects_for(&self, turn: u32) -> &[Effect] {
        self.reserved_effects
            .get(&turn)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Consume the draw reservation for `turn`.
    pub fn take_draws(&mut self, turn: u32) -> u32 {
        self.draw_reservations.remove(&turn).unwrap_or(0)
    }

    /// Consume the effects queued for `turn`.
    pub fn take_effects(&mut self, turn: u32) -> Vec<Effect> {
        self.reserved_effects.remove(&turn).unwrap_or_default()
    }

    /// Check if nothing is reserved for any turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_reservations.is_empty() && self.reserved_effects.is_empty()
    }
}
