//! # idol-stage
//!
//! A deterministic engine for a turn-based solo idol-performance card game.
//!
//! ## Design Principles
//!
//! 1. **Effects Are Data**: every card, P-item, drink, and turn event carries
//!    an [`Effect`] value, resolved by one interpreter. Catalog entries can be
//!    cloned, compared, and serialized.
//!
//! 2. **Invalid Commands Are Not Errors**: the turn machine reports a
//!    rejected command as `false` and leaves the state unchanged.
//!
//! 3. **Seeded Randomness**: the deck shuffle, the turn schedule, and deck
//!    recycling all draw from one seeded [`GameRng`], so a session replays
//!    identically from its seed.
//!
//! ## Modules
//!
//! - `core`: game state, commands, configuration, RNG, log, errors
//! - `resources`: HP, energy, concentration, score, temporary and permanent buffs
//! - `schedule`: turn schedule, reserved draws and effects, recurring effects
//! - `zones`: deck, hand, discard, exile
//! - `cards`: cards, drinks, characters, name-keyed registry
//! - `effects`: effect and condition definitions and the resolver
//! - `triggers`: P-items
//! - `rules`: turn machine, scoring, session builder, summary
//! - `catalog`: the standard content
//!
//! ## Example
//!
//! ```
//! use idol_stage::catalog::{characters, decks, Catalog};
//!
//! let catalog = Catalog::standard();
//! let mut state = catalog
//!     .session(characters::LOVE_KOTONE)
//!     .with_template(decks::IDEAL)
//!     .with_seed(42)
//!     .build()
//!     .unwrap();
//!
//! while !state.is_game_over() {
//!     state.start_turn();
//!     while (0..state.hand().len()).any(|i| state.play_card(i)) {}
//!     state.end_turn();
//! }
//!
//! let summary = state.summary();
//! assert_eq!(summary.turns_played, 12);
//! ```

pub mod core;
pub mod resources;
pub mod schedule;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod triggers;
pub mod rules;
pub mod catalog;

// Re-export commonly used types
pub use crate::core::{
    Action, GameLog, GameRng, GameRngState, GameState, GenreWeight, GenreWeights, Phase, PlayRecord,
    SessionConfig, SessionError, MAX_DRINK_SLOTS, MAX_TURNS,
};

pub use crate::resources::{BuffTable, Buffs, PermanentBuff, PermanentBuffs, Resources, TempBuff};

pub use crate::schedule::{DeferredSchedule, Genre, RecurringEffect, TurnInfo, TurnSchedule};

pub use crate::zones::Piles;

pub use crate::cards::{Card, CardCategory, Character, Cost, CostKind, Drink, Rarity, Registry};

pub use crate::effects::{Condition, Effect, EffectResolver};

pub use crate::triggers::{PItem, TriggerPoint};

pub use crate::rules::{rank, SessionBuilder, SessionSummary};

pub use crate::catalog::{Catalog, DeckList};

#[cfg(test)]
pub(crate) mod testing {
    //! Fixtures shared by unit tests.

    use crate::cards::{Card, CardCategory, Character, Cost};
    use crate::core::{GameState, GenreWeights, SessionConfig};
    use crate::effects::{Condition, Effect};
    use crate::schedule::Genre;
    use crate::triggers::{PItem, TriggerPoint};

    /// A character with no turn events, scheduled dance / visual / vocal.
    pub fn dummy_character() -> Character {
        Character::new(
            "Tester",
            [Genre::Dance, Genre::Visual, Genre::Vocal],
            Card::new("Signature", Cost::resource(0), CardCategory::Mental, Effect::Nothing),
            PItem::new(
                "Charm",
                "never fires",
                TriggerPoint::TurnStart,
                Condition::not(Condition::Always),
                Effect::Nothing,
            ),
        )
    }

    /// A turn-1 state with an empty deck, no items or drinks, unscaled
    /// genre weights, and seed 42.
    pub fn blank_state() -> GameState {
        let config = SessionConfig::default()
            .with_seed(42)
            .with_genre_weights(GenreWeights::neutral());
        GameState::new(&dummy_character(), Vec::new(), Vec::new(), Vec::new(), config)
    }

    /// `count` free, reusable mental cards with no effect.
    pub fn filler_cards(count: usize) -> Vec<Card> {
        (0..count)
            .map(|i| {
                Card::new(
                    format!("Filler {i}"),
                    Cost::resource(0),
                    CardCategory::Mental,
                    Effect::Nothing,
                )
            })
            .collect()
    }
}
