//! Name-keyed registry for catalog templates.
//!
//! Cards, P-items, drinks, and characters are all looked up by their unique
//! name. A [`Registry`] keeps them in registration order (for stable listing
//! in a deck builder) with an index for fast lookup.

use rustc_hash::FxHashMap;

use super::{Card, Character, Drink};
use crate::triggers::PItem;

/// Anything with a unique catalog name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Card {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for PItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Drink {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Character {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Registry of catalog templates.
///
/// ## Example
///
/// ```
/// use idol_stage::cards::{Card, CardCategory, Cost, Registry};
/// use idol_stage::effects::Effect;
///
/// let mut registry = Registry::new();
/// registry.register(Card::new("Presence", Cost::resource(0), CardCategory::Mental, Effect::AddConcentration(5)));
///
/// let found = registry.get("Presence").unwrap();
/// assert_eq!(found.cost.amount, 0);
/// ```
#[derive(Clone, Debug)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: FxHashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T: Named> Registry<T> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// Panics if a template with the same name already exists.
    pub fn register(&mut self, entry: T) {
        let name = entry.name().to_string();
        if self.index.contains_key(&name) {
            panic!("{name:?} already registered");
        }
        self.index.insert(name, self.entries.len());
        self.entries.push(entry);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Named::name)
    }

    /// Find templates matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &T>
    where
        F: Fn(&T) -> bool,
    {
        self.entries.iter().filter(move |e| predicate(e))
    }
}

impl<T: Named> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Self::new();
        for entry in iter {
            registry.register(entry);
        }
        registry
    }
}
