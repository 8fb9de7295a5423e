//! Standard P-items.

use crate::cards::CardCategory;
use crate::effects::{Condition, Effect};
use crate::resources::TempBuff;
use crate::schedule::Genre;
use crate::triggers::{PItem, TriggerPoint};

pub const LOVE_HEART: &str = "Love Heart+";
pub const BIG_LUGGAGE: &str = "Big Luggage";
pub const CUE: &str = "Cue";
pub const T_SHIRT: &str = "T-Shirt";

/// Every standard P-item.
#[must_use]
pub fn standard_items() -> Vec<PItem> {
    vec![
        PItem::new(
            LOVE_HEART,
            "Mental (concentration 13+)",
            TriggerPoint::AfterAction,
            Condition::all([
                Condition::LastCardWas(CardCategory::Mental),
                Condition::ConcentrationAtLeast(13),
            ]),
            Effect::batch([
                Effect::GainEnergy(10),
                Effect::DoubleNextMental,
                Effect::Draw(2),
                Effect::GainActions(1),
            ]),
        )
        .with_art("item_syuki_heart.png"),
        PItem::new(
            BIG_LUGGAGE,
            "Action +1 on a dance turn",
            TriggerPoint::TurnStart,
            Condition::GenreIs(Genre::Dance),
            Effect::GainActions(1),
        )
        .with_art("item_hako.png"),
        PItem::new(
            CUE,
            "Action +1 on a visual turn",
            TriggerPoint::TurnStart,
            Condition::GenreIs(Genre::Visual),
            Effect::GainActions(1),
        )
        .with_art("item_nakanaori.png"),
        PItem::new(
            T_SHIRT,
            "Action +1 in good condition",
            TriggerPoint::TurnStart,
            Condition::BuffActive(TempBuff::GoodCondition),
            Effect::batch([
                Effect::GainActions(1),
                Effect::buff(TempBuff::GoodCondition, 6),
            ]),
        )
        .with_art("item_shirt.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_single_use() {
        let items = standard_items();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.once && !item.used));
    }

    #[test]
    fn test_trigger_points() {
        let after: Vec<_> = standard_items()
            .into_iter()
            .filter(|item| item.trigger == TriggerPoint::AfterAction)
            .map(|item| item.name)
            .collect();
        assert_eq!(after, [LOVE_HEART]);
    }
}
