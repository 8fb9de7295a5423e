//! Drinks: single-use consumables.

use serde::{Deserialize, Serialize};

use super::definition::PLACEHOLDER_ART;
use crate::effects::Effect;

/// A drink in one of the session's drink slots.
///
/// Drinking costs nothing and does not spend the action budget; the drink
/// leaves its slot and its effect resolves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub name: String,
    pub description: String,
    pub effect: Effect,
    pub art: String,
}

impl Drink {
    /// Create a drink.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: Effect) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
            art: PLACEHOLDER_ART.to_string(),
        }
    }

    #[must_use]
    pub fn with_art(mut self, art: impl Into<String>) -> Self {
        self.art = art.into();
        self
    }
}
