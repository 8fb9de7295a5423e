//! Standard card pool.

use crate::cards::{Card, CardCategory, Cost, Rarity};
use crate::effects::{Condition, Effect};
use crate::resources::{PermanentBuff, TempBuff};

use CardCategory::{Active, Mental};

pub const NATIONAL_IDOL: &str = "National Idol";
pub const CALL_AND_RESPONSE: &str = "Call & Response+";
pub const FRESH_START: &str = "Fresh Start";
pub const CAREFREE: &str = "Carefree";
pub const EASING_MOMENT: &str = "Easing Moment";
pub const CAPTIVATING_GAZE: &str = "Captivating Gaze";
pub const SUPREME_ENTERTAINMENT: &str = "Supreme Entertainment";
pub const CAPTIVATING_PERFORMANCE: &str = "Captivating Performance";
pub const SUMMER_NIGHT_MEMORY: &str = "Summer Night Memory";
pub const NATURAL_TALENT: &str = "Natural Talent";
pub const SELF_ESTEEM_SKYROCKETING: &str = "Self-Esteem Skyrocketing";
pub const POWER_OF_WISHES: &str = "Power of Wishes";
pub const SPOTLIGHT: &str = "Spotlight";
pub const SPRECHCHOR: &str = "Sprechchor";
pub const PRESENCE: &str = "Presence";
pub const IDOL_DECLARATION: &str = "Idol Declaration";
pub const STARTING_SIGNAL: &str = "Starting Signal+";
pub const DEEP_BREATH: &str = "Deep Breath+";

/// Every card of the standard pool, SSR first.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    vec![
        // SSR
        Card::new(
            NATIONAL_IDOL,
            Cost::resource(0),
            Mental,
            Effect::batch([
                Effect::DoubleCharges(1),
                Effect::GainActions(1),
                Effect::buff(TempBuff::GoodCondition, -1),
            ]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("[Once] Next effect resolves twice (stacks) / Action +1")
        .with_art("famous_idle.png"),
        Card::new(
            CALL_AND_RESPONSE,
            Cost::resource(3),
            Active,
            Effect::batch([Effect::score(15), Effect::score_with_rate(34, 1.5)]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("P+15 / P+34 (concentration ×1.5)")
        .with_art("card_cr.png"),
        Card::new(
            FRESH_START,
            Cost::resource(2),
            Mental,
            Effect::batch([Effect::CycleHand { extra: 2 }, Effect::GainActions(1)]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("[Once] Redraw hand +2 / Action +1")
        .with_art("card_shikiri.png"),
        Card::new(
            CAREFREE,
            Cost::resource(4),
            Mental,
            Effect::permanent(PermanentBuff::TurnEndConc, 2),
        )
        .once()
        .rarity(Rarity::SR)
        .described("Permanent: concentration +2 at turn end")
        .with_art("card_ranman.png"),
        Card::new(
            EASING_MOMENT,
            Cost::resource(0),
            Mental,
            Effect::batch([
                Effect::buff(TempBuff::GoodCondition, -1),
                Effect::buff(TempBuff::ConcBoost, 3),
                Effect::AddConcentration(4),
            ]),
        )
        .requires(Condition::TurnAtLeast(3))
        .once()
        .rarity(Rarity::SSR)
        .described("[Turn 3+] Concentration +50% / Concentration +4")
        .with_art("card_hogure.png"),
        Card::new(
            CAPTIVATING_GAZE,
            Cost::concentration(3),
            Mental,
            Effect::batch([Effect::buff(TempBuff::SuperGood, 5), Effect::GainActions(1)]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("Super good +5 / Action +1")
        .with_art("card_shisen.png"),
        Card::new(
            SUPREME_ENTERTAINMENT,
            Cost::concentration(2),
            Active,
            Effect::batch([
                Effect::reserve_draw(1, 1),
                Effect::permanent(PermanentBuff::ActiveScoreFixed, 3),
            ]),
        )
        .once()
        .ultimate()
        .rarity(Rarity::SSR)
        .described("Permanent: active P+3 / Draw 1 next turn")
        .with_art("card_entame.png"),
        Card::new(
            CAPTIVATING_PERFORMANCE,
            Cost::resource(6),
            Active,
            Effect::batch([
                Effect::buff(TempBuff::SuperGood, 4),
                Effect::reserve(1, Effect::score(47)),
                Effect::reserve(2, Effect::score(21)),
            ]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("Super good +4 / P+47 next turn / P+21 in two turns")
        .with_art("card_pafo.png"),
        Card::new(
            SUMMER_NIGHT_MEMORY,
            Cost::resource(6),
            Active,
            Effect::batch([Effect::GainActions(1), Effect::ActivateSummerMemory]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("Action +1 / P+4 every 5 plays")
        .with_art("card_natsuyo.png"),
        Card::new(
            NATURAL_TALENT,
            Cost::resource(5),
            Mental,
            Effect::batch([
                Effect::buff(TempBuff::GoodCondition, 6),
                Effect::AddConcentration(3),
                Effect::reserve(1, Effect::GainActions(1)),
            ]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("Good condition +6 / Concentration +3 / Action +1 next turn")
        .with_art("card_tenpu.png"),
        Card::new(
            SELF_ESTEEM_SKYROCKETING,
            Cost::resource(-1),
            Mental,
            Effect::batch([
                Effect::permanent(PermanentBuff::MentalConc, 2),
                Effect::AddConcentration(1),
            ]),
        )
        .once()
        .rarity(Rarity::SSR)
        .described("Permanent: mental concentration +2")
        .with_art("card_syuki.png"),
        // SR
        Card::new(
            POWER_OF_WISHES,
            Cost::resource(3),
            Mental,
            Effect::batch([
                Effect::permanent(PermanentBuff::ActiveConc, 1),
                Effect::AddConcentration(2),
            ]),
        )
        .once()
        .rarity(Rarity::SR)
        .described("Permanent: concentration +1 per active card / Concentration +2")
        .with_art("card_negai.png"),
        Card::new(
            SPOTLIGHT,
            Cost::resource(0),
            Mental,
            Effect::batch([
                Effect::reserve_draw(1, 2),
                Effect::reserve_draw(2, 1),
                Effect::buff(TempBuff::GoodCondition, 9),
            ]),
        )
        .rarity(Rarity::SR)
        .described("Draw 2 next turn + 1 in two turns / Good condition +9")
        .with_art("card_spot.png"),
        Card::new(
            SPRECHCHOR,
            Cost::concentration(1),
            Active,
            Effect::batch([
                Effect::score(6),
                Effect::buff(TempBuff::GoodCondition, 3),
                Effect::GainActions(1),
            ]),
        )
        .rarity(Rarity::SR)
        .described("[Concentration 1] P+6 / Good condition 3T / Action +1")
        .with_art("card_syupu.png"),
        Card::new(
            PRESENCE,
            Cost::resource(0),
            Mental,
            Effect::batch([Effect::AddConcentration(5), Effect::GainActions(1)]),
        )
        .rarity(Rarity::SR)
        .described("Concentration +5 / Action +1")
        .with_art("card_sonzai.png"),
        Card::new(
            IDOL_DECLARATION,
            Cost::resource(0),
            Mental,
            Effect::batch([Effect::Draw(2), Effect::GainActions(1)]),
        )
        .once()
        .rarity(Rarity::SR)
        .described("Draw 2")
        .with_art("card_dolsen.png"),
        Card::new(
            STARTING_SIGNAL,
            Cost::resource(3),
            Mental,
            Effect::buff(TempBuff::GoodCondition, 7),
        )
        .once()
        .rarity(Rarity::SR)
        .described("[Once] Good condition +7")
        .with_art("card_aizu.png"),
        // R
        Card::new(
            DEEP_BREATH,
            Cost::resource(7),
            Mental,
            Effect::batch([
                Effect::buff(TempBuff::GoodCondition, 4),
                Effect::AddConcentration(5),
            ]),
        )
        .once()
        .rarity(Rarity::R)
        .described("[Once] Good condition +4 / Concentration +5")
        .with_art("card_hitokyu.png"),
    ]
}
