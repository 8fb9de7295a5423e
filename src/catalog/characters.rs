//! Standard characters.

use super::cards::SELF_ESTEEM_SKYROCKETING;
use super::items::LOVE_HEART;
use crate::cards::{Card, Character, Registry};
use crate::effects::Effect;
use crate::schedule::Genre;
use crate::triggers::PItem;

pub const LOVE_KOTONE: &str = "Love Kotone";

/// Every standard character, with signature cards and items taken from
/// the given pools.
///
/// # Panics
///
/// Panics if a signature card or item is missing from its pool.
#[must_use]
pub fn standard_characters(cards: &Registry<Card>, items: &Registry<PItem>) -> Vec<Character> {
    let signature = |name: &str| {
        cards
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("signature card {name:?} not in pool"))
    };
    let item = |name: &str| {
        items
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("signature item {name:?} not in pool"))
    };

    vec![Character::new(
        LOVE_KOTONE,
        [Genre::Dance, Genre::Visual, Genre::Vocal],
        signature(SELF_ESTEEM_SKYROCKETING),
        item(LOVE_HEART),
    )
    .with_turn_event(5, Effect::AddConcentration(8))
    .with_turn_event(9, Effect::AddConcentration(13))]
}
