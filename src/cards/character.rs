//! Characters: the identity a session is played as.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::effects::Effect;
use crate::schedule::Genre;
use crate::triggers::PItem;

/// A playable character.
///
/// The genre preferences (most preferred first) shape the turn schedule.
/// The signature card joins the deck and the signature item is always the
/// first P-item of the session. Turn events fire automatically at the start
/// of their turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub genres: [Genre; 3],
    pub signature_card: Card,
    pub signature_item: PItem,
    pub turn_events: FxHashMap<u32, Effect>,
}

impl Character {
    /// Create a character without turn events.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        genres: [Genre; 3],
        signature_card: Card,
        signature_item: PItem,
    ) -> Self {
        debug_assert!(
            genres[0] != genres[1] && genres[1] != genres[2] && genres[0] != genres[2],
            "genre preferences must be distinct"
        );
        Self {
            name: name.into(),
            genres,
            signature_card,
            signature_item,
            turn_events: FxHashMap::default(),
        }
    }

    /// Add an effect fired at the start of `turn` (builder pattern).
    #[must_use]
    pub fn with_turn_event(mut self, turn: u32, effect: Effect) -> Self {
        self.turn_events.insert(turn, effect);
        self
    }
}
