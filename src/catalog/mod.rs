//! The effect catalog: every card, P-item, drink, character, and template
//! deck the game ships with.
//!
//! ## Key Types
//!
//! - [`Catalog`]: name-keyed registries of all templates
//! - [`DeckList`]: card name to copy count
//!
//! Templates are cloned into a session when it is built; the catalog itself
//! is never mutated by play.
//!
//! ```
//! use idol_stage::catalog::{Catalog, cards, characters};
//!
//! let catalog = Catalog::standard();
//! assert!(catalog.card(cards::SPOTLIGHT).is_ok());
//!
//! let kotone = catalog.character(characters::LOVE_KOTONE).unwrap();
//! assert_eq!(kotone.signature_card.name, cards::SELF_ESTEEM_SKYROCKETING);
//! ```

pub mod cards;
pub mod characters;
pub mod decks;
pub mod drinks;
pub mod items;

use std::collections::BTreeMap;

pub use decks::DeckList;

use crate::cards::{Card, Character, Drink, Registry};
use crate::core::SessionError;
use crate::rules::SessionBuilder;
use crate::triggers::PItem;

/// All catalog templates.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub cards: Registry<Card>,
    pub items: Registry<PItem>,
    pub drinks: Registry<Drink>,
    pub characters: Registry<Character>,
    pub decks: BTreeMap<String, DeckList>,
}

impl Catalog {
    /// The catalog the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        let cards: Registry<Card> = cards::standard_cards().into_iter().collect();
        let items: Registry<PItem> = items::standard_items().into_iter().collect();
        let characters = characters::standard_characters(&cards, &items)
            .into_iter()
            .collect();
        Self {
            cards,
            items,
            drinks: drinks::standard_drinks().into_iter().collect(),
            characters,
            decks: decks::standard_decks(),
        }
    }

    pub fn card(&self, name: &str) -> Result<&Card, SessionError> {
        self.cards
            .get(name)
            .ok_or_else(|| SessionError::UnknownCard(name.to_string()))
    }

    pub fn item(&self, name: &str) -> Result<&PItem, SessionError> {
        self.items
            .get(name)
            .ok_or_else(|| SessionError::UnknownItem(name.to_string()))
    }

    pub fn drink(&self, name: &str) -> Result<&Drink, SessionError> {
        self.drinks
            .get(name)
            .ok_or_else(|| SessionError::UnknownDrink(name.to_string()))
    }

    pub fn character(&self, name: &str) -> Result<&Character, SessionError> {
        self.characters
            .get(name)
            .ok_or_else(|| SessionError::UnknownCharacter(name.to_string()))
    }

    pub fn deck(&self, name: &str) -> Result<&DeckList, SessionError> {
        self.decks
            .get(name)
            .ok_or_else(|| SessionError::UnknownDeck(name.to_string()))
    }

    /// Start building a session for `character`.
    #[must_use]
    pub fn session(&self, character: impl Into<String>) -> SessionBuilder<'_> {
        SessionBuilder::new(self, character)
    }
}
