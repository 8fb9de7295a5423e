//! Template deck lists.

use std::collections::BTreeMap;

use super::cards::*;

/// Card name to copy count.
pub type DeckList = BTreeMap<String, u32>;

pub const IDEAL: &str = "Ideal";

/// Every template deck, by name.
#[must_use]
pub fn standard_decks() -> BTreeMap<String, DeckList> {
    let ideal: DeckList = [
        NATIONAL_IDOL,
        CALL_AND_RESPONSE,
        FRESH_START,
        CAPTIVATING_GAZE,
        SUPREME_ENTERTAINMENT,
        CAPTIVATING_PERFORMANCE,
        SUMMER_NIGHT_MEMORY,
        NATURAL_TALENT,
        SPRECHCHOR,
        DEEP_BREATH,
        EASING_MOMENT,
        POWER_OF_WISHES,
        IDOL_DECLARATION,
        PRESENCE,
        SPOTLIGHT,
        CAREFREE,
        STARTING_SIGNAL,
    ]
    .into_iter()
    .map(|name| (name.to_string(), 1))
    .collect();

    BTreeMap::from([(IDEAL.to_string(), ideal)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_deck() {
        let decks = standard_decks();
        let ideal = &decks[IDEAL];

        assert_eq!(ideal.len(), 17);
        assert!(ideal.values().all(|&count| count == 1));
        assert!(!ideal.contains_key(SELF_ESTEEM_SKYROCKETING));
    }
}
