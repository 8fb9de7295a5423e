//! The scoring function and the post-session rank.
//!
//! A score delta is computed in three steps:
//!
//! 1. `boost = 1 + 0.1 × param_boost`, plus 0.3 while the 30% boost is active
//! 2. `power = ceil((base + concentration × rate) × boost)`
//! 3. `delta = ceil(power × condition_multiplier × shares / scale)`, with the
//!    turn's genre weight divided out last
//!
//! The condition multiplier is 1.5 under good condition, plus 0.1 per
//! good-condition stack when super good is also active.

use crate::core::{GameState, GenreWeight};
use crate::resources::{Buffs, TempBuff};

/// Parameter boost multiplier from the current buffs.
#[must_use]
pub fn parameter_boost(buffs: &Buffs) -> f64 {
    let mut boost = 1.0 + f64::from(buffs.param_boost) * 0.1;
    if buffs.is_active(TempBuff::ParamBoost30) {
        boost += 0.3;
    }
    boost
}

/// Condition multiplier from the current buffs.
#[must_use]
pub fn condition_multiplier(buffs: &Buffs) -> f64 {
    if !buffs.is_active(TempBuff::GoodCondition) {
        return 1.0;
    }
    let mut mult = 1.5;
    if buffs.is_active(TempBuff::SuperGood) {
        mult += f64::from(buffs.good_condition) * 0.1;
    }
    mult
}

/// Score delta for an action with `base` power, without applying it.
#[must_use]
pub fn score_delta(
    base: i64,
    concentration: i64,
    concentration_rate: f64,
    buffs: &Buffs,
    genre_weight: GenreWeight,
) -> i64 {
    let added = concentration as f64 * concentration_rate;
    let power = ((base as f64 + added) * parameter_boost(buffs)).ceil();
    genre_weight
        .apply(power * condition_multiplier(buffs))
        .ceil() as i64
}

/// Post-session rank for a final score.
#[must_use]
pub fn rank(score: i64) -> i64 {
    let base = 9957.0;
    let exam = 1500.0 + 750.0 + 800.0 + 400.0 + 0.01 * (score - 40000) as f64;
    (base + exam).ceil() as i64
}

impl GameState {
    /// Score an action and add it to the running total.
    ///
    /// Turns past the end of the schedule use the last slot's weight.
    /// Returns the delta.
    pub fn calculate_score(&mut self, base: i64, concentration_rate: f64) -> i64 {
        let weight = self.turn_info.weight(self.turn);
        let delta = score_delta(
            base,
            self.resources.concentration,
            concentration_rate,
            &self.buffs,
            weight,
        );
        self.resources.add_score(delta);
        tracing::trace!(base, delta, turn = self.turn, "score");
        self.log.push(format!("Score +{delta}"));
        delta
    }
}
