//! Player commands and the play history.
//!
//! An [`Action`] names one command of the turn machine. Orchestrators that
//! prefer data over method calls (replays, scripted drivers, benches) feed
//! actions to [`GameState::apply`](crate::core::GameState::apply).
//!
//! A [`PlayRecord`] is written for every successfully played card and kept
//! for the whole session.

use serde::{Deserialize, Serialize};

use crate::cards::CardCategory;

/// A command issued to the turn machine.
///
/// ```
/// use idol_stage::core::Action;
///
/// let script = [Action::StartTurn, Action::PlayCard(0), Action::EndTurn];
/// assert!(script[1].is_card_play());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Begin the current turn: turn events, turn-start items, draws, recurring effects.
    StartTurn,
    /// Play the card at this hand index.
    PlayCard(usize),
    /// Consume the drink at this slot index.
    UseDrink(usize),
    /// Close the current turn and advance.
    EndTurn,
}

impl Action {
    /// Check if this action spends the action budget.
    #[must_use]
    pub fn is_card_play(&self) -> bool {
        matches!(self, Action::PlayCard(_))
    }
}

/// A card that was played, with the turn it was played on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Turn number when the card was played.
    pub turn: u32,

    /// Name of the played card.
    pub card: String,

    /// Category of the played card.
    pub category: CardCategory,
}

impl PlayRecord {
    /// Create a new play record.
    #[must_use]
    pub fn new(turn: u32, card: impl Into<String>, category: CardCategory) -> Self {
        Self {
            turn,
            card: card.into(),
            category,
        }
    }
}
