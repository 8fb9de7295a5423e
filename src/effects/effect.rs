//! Effect definitions.
//!
//! Effects are the executable half of every catalog entry. They are plain
//! data (serializable, comparable) rather than closures, and are resolved
//! against a [`GameState`](crate::core::GameState) by the
//! [`EffectResolver`](super::EffectResolver).

use serde::{Deserialize, Serialize};

use crate::resources::{PermanentBuff, TempBuff};

/// An atomic or composite game effect.
///
/// ## Scoring and resources
///
/// - `Score`: run the scoring function with a base power and concentration rate
/// - `AddConcentration`: concentration gain, scaled by the concentration boost
/// - `GainEnergy`, `LoseHp`: raw resource changes
///
/// ## Buffs
///
/// - `AddBuff`: add turns to a temporary buff (may be negative)
/// - `AddPermanentBuff`: raise a deck-long modifier
///
/// ## Tempo
///
/// - `GainActions`: extra plays this turn
/// - `DoubleCharges`: the next N card resolutions repeat twice
/// - `DoubleNextMental`: the next mental card resolves twice
/// - `ActivateSummerMemory`: score a bonus every few card plays
///
/// ## Cards
///
/// - `Draw`: draw now
/// - `CycleHand`: discard the hand and draw that many plus `extra`
/// - `NextTurnDrawBonus`: extra draws at the next turn start
///
/// ## Deferred
///
/// - `ReserveDraw`: extra draws at the start of a later turn
/// - `ReserveEffect`: resolve an effect when a later turn begins
/// - `Recurring`: resolve an effect at each of the next N turn starts
///
/// ## Composite
///
/// - `Batch`: resolve effects in order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Does nothing.
    #[default]
    Nothing,

    /// Score `base` plus `concentration × concentration_rate`.
    Score { base: i64, concentration_rate: f64 },

    /// Gain concentration (×1.5 rounded up under the concentration boost).
    AddConcentration(i64),

    /// Gain energy.
    GainEnergy(i64),

    /// Lose HP, floored at 0.
    LoseHp(i64),

    /// Gain extra actions for this turn.
    GainActions(u32),

    /// Add turns to a temporary buff.
    AddBuff { buff: TempBuff, turns: i32 },

    /// Raise a permanent buff.
    AddPermanentBuff { buff: PermanentBuff, amount: i64 },

    /// The next `n` card resolutions repeat twice.
    DoubleCharges(u32),

    /// The next mental card resolves twice.
    DoubleNextMental,

    /// Turn on the every-Nth-play bonus.
    ActivateSummerMemory,

    /// Draw cards now.
    Draw(u32),

    /// Discard the whole hand and draw its size plus `extra`.
    CycleHand { extra: u32 },

    /// Draw extra cards at the next turn start.
    NextTurnDrawBonus(u32),

    /// Draw extra cards at the start of the turn `turns_later` from now.
    ReserveDraw { turns_later: u32, amount: u32 },

    /// Resolve `effect` when the turn `turns_later` from now begins.
    ReserveEffect { turns_later: u32, effect: Box<Effect> },

    /// Resolve `effect` at each of the next `turns` turn starts.
    Recurring {
        turns: u32,
        effect: Box<Effect>,
        description: String,
    },

    /// Resolve several effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Score `base` at the normal concentration rate.
    #[must_use]
    pub fn score(base: i64) -> Self {
        Self::score_with_rate(base, 1.0)
    }

    /// Score `base` with a custom concentration rate.
    #[must_use]
    pub fn score_with_rate(base: i64, concentration_rate: f64) -> Self {
        Self::Score {
            base,
            concentration_rate,
        }
    }

    /// Add turns to a temporary buff.
    #[must_use]
    pub fn buff(buff: TempBuff, turns: i32) -> Self {
        Self::AddBuff { buff, turns }
    }

    /// Raise a permanent buff.
    #[must_use]
    pub fn permanent(buff: PermanentBuff, amount: i64) -> Self {
        Self::AddPermanentBuff { buff, amount }
    }

    /// Reserve draws for a later turn.
    #[must_use]
    pub fn reserve_draw(turns_later: u32, amount: u32) -> Self {
        Self::ReserveDraw {
            turns_later,
            amount,
        }
    }

    /// Reserve an effect for a later turn.
    #[must_use]
    pub fn reserve(turns_later: u32, effect: Effect) -> Self {
        Self::ReserveEffect {
            turns_later,
            effect: Box::new(effect),
        }
    }

    /// Resolve an effect at each of the next `turns` turn starts.
    #[must_use]
    pub fn recurring(turns: u32, effect: Effect, description: impl Into<String>) -> Self {
        Self::Recurring {
            turns,
            effect: Box::new(effect),
            description: description.into(),
        }
    }

    /// Create a batch of effects.
    #[must_use]
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }
}
