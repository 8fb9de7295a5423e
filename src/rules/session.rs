//! Building a session from catalog names.
//!
//! The builder resolves every name against a [`Catalog`] and assembles the
//! starting deck, P-items, and drinks:
//!
//! - deck: every listed card times its count, then the character's
//!   signature card
//! - P-items: the signature item first, then the selected items (a
//!   selection of the signature item itself is ignored)
//! - drinks: at most [`MAX_DRINK_SLOTS`]

use crate::catalog::{Catalog, DeckList};
use crate::core::{GameState, SessionConfig, SessionError, MAX_DRINK_SLOTS};

/// Builder for a [`GameState`].
///
/// ## Example
///
/// ```
/// use idol_stage::catalog::{characters, decks, drinks, items, Catalog};
///
/// let catalog = Catalog::standard();
/// let state = catalog
///     .session(characters::LOVE_KOTONE)
///     .with_template(decks::IDEAL)
///     .with_item(items::CUE)
///     .with_drink(drinks::BOOST_EXTRACT)
///     .with_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.piles.deck.len(), 18);
/// assert_eq!(state.p_items[0].name, items::LOVE_HEART);
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder<'a> {
    catalog: &'a Catalog,
    character: String,
    template: Option<String>,
    deck: DeckList,
    items: Vec<String>,
    drinks: Vec<String>,
    config: SessionConfig,
}

impl<'a> SessionBuilder<'a> {
    pub fn new(catalog: &'a Catalog, character: impl Into<String>) -> Self {
        Self {
            catalog,
            character: character.into(),
            template: None,
            deck: DeckList::new(),
            items: Vec::new(),
            drinks: Vec::new(),
            config: SessionConfig::default(),
        }
    }

    /// Start the deck from a template list. Explicit cards are added on top.
    #[must_use]
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// Add `count` copies of a card.
    #[must_use]
    pub fn with_card(mut self, name: impl Into<String>, count: u32) -> Self {
        *self.deck.entry(name.into()).or_default() += count;
        self
    }

    /// Add every entry of a deck list.
    #[must_use]
    pub fn with_deck(mut self, list: &DeckList) -> Self {
        for (name, &count) in list {
            *self.deck.entry(name.clone()).or_default() += count;
        }
        self
    }

    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.items.push(name.into());
        self
    }

    #[must_use]
    pub fn with_drink(mut self, name: impl Into<String>) -> Self {
        self.drinks.push(name.into());
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Resolve every name and create the session.
    pub fn build(self) -> Result<GameState, SessionError> {
        let catalog = self.catalog;
        let character = catalog.character(&self.character)?;

        if self.drinks.len() > MAX_DRINK_SLOTS {
            return Err(SessionError::TooManyDrinks {
                count: self.drinks.len(),
                max: MAX_DRINK_SLOTS,
            });
        }

        let mut list = match &self.template {
            Some(name) => catalog.deck(name)?.clone(),
            None => DeckList::new(),
        };
        for (name, count) in self.deck {
            *list.entry(name).or_default() += count;
        }

        let mut deck = Vec::new();
        for (name, &count) in &list {
            if count == 0 {
                continue;
            }
            let card = catalog.card(name)?;
            deck.extend(std::iter::repeat_with(|| card.clone()).take(count as usize));
        }
        deck.push(character.signature_card.clone());

        let mut p_items = vec![character.signature_item.clone()];
        for name in &self.items {
            if *name == character.signature_item.name {
                continue;
            }
            p_items.push(catalog.item(name)?.clone());
        }

        let drinks = self
            .drinks
            .iter()
            .map(|name| catalog.drink(name).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState::new(character, deck, p_items, drinks, self.config))
    }
}
