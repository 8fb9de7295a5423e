//! Standard drinks.

use crate::cards::Drink;
use crate::effects::Effect;
use crate::resources::TempBuff;

pub const SENBURI_SODA: &str = "Senburi Soda";
pub const BOOST_EXTRACT: &str = "Boost Extract";

#[must_use]
pub fn standard_drinks() -> Vec<Drink> {
    vec![
        Drink::new(
            SENBURI_SODA,
            "Parameter +10% / Draw 2 / Draw 1 for 5 turns",
            Effect::batch([
                Effect::buff(TempBuff::ParamBoost, 5),
                Effect::Draw(2),
                Effect::recurring(5, Effect::Draw(1), "draw 1"),
            ]),
        )
        .with_art("drink_senburi.png"),
        Drink::new(
            BOOST_EXTRACT,
            "HP -2 / Parameter +30% (3 turns)",
            Effect::batch([
                Effect::LoseHp(2),
                Effect::buff(TempBuff::ParamBoost30, 3),
            ]),
        )
        .with_art("drink_boost.png"),
    ]
}
