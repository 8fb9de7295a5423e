//! Session configuration.
//!
//! A [`SessionConfig`] carries the numeric rules of one playthrough: starting
//! resources, hand and draw sizes, genre weights, and the constants of the
//! fixed-score and encore mechanics. The defaults are the standard rule set;
//! tests and alternative modes override individual values with the `with_*`
//! builders.
//!
//! The turn count is not configurable: the turn schedule has exactly
//! [`MAX_TURNS`] slots with pinned positions.

use serde::{Deserialize, Serialize};

/// Number of turns in a session. The session is finished once `turn` exceeds it.
pub const MAX_TURNS: u32 = 12;

/// Maximum number of drink slots a session can be built with.
pub const MAX_DRINK_SLOTS: usize = 3;

/// Score weight of one schedule slot, kept as shares over a divisor.
///
/// The division is applied last, after the shares multiply the score, so a
/// whole-number product such as `100 × 14 / 100` stays exact before rounding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenreWeight {
    pub shares: f64,
    pub scale: f64,
}

impl GenreWeight {
    /// A weight that leaves scores unchanged.
    pub const UNIT: Self = Self {
        shares: 1.0,
        scale: 1.0,
    };

    /// Scale `value` by this weight.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        value * self.shares / self.scale
    }
}

impl Default for GenreWeight {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Per-preference score weights for the turn schedule.
///
/// Weights are expressed in share units over a common `scale`, so the
/// default 19 / 14 / 8 over 100 scores 0.19 / 0.14 / 0.08 of the power.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenreWeights {
    /// Shares for the character's first genre preference.
    pub first: f64,
    /// Shares for the second preference.
    pub second: f64,
    /// Shares for the third preference.
    pub third: f64,
    /// Divisor turning shares into a multiplier.
    pub scale: f64,
}

impl GenreWeights {
    /// Weights that leave scores unscaled (every slot multiplies by 1.0).
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            first: 1.0,
            second: 1.0,
            third: 1.0,
            scale: 1.0,
        }
    }

    /// Weight for the preference at `rank` (0 = first).
    #[must_use]
    pub fn weight(&self, rank: usize) -> GenreWeight {
        let shares = match rank {
            0 => self.first,
            1 => self.second,
            _ => self.third,
        };
        GenreWeight {
            shares,
            scale: self.scale,
        }
    }
}

impl Default for GenreWeights {
    fn default() -> Self {
        Self {
            first: 19.0,
            second: 14.0,
            third: 8.0,
            scale: 100.0,
        }
    }
}

/// Numeric rules for one playthrough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Starting (and maximum) HP.
    pub max_hp: i64,

    /// Energy at the start of the session.
    pub initial_energy: i64,

    /// Maximum number of cards in hand. Draws stop once it is reached.
    pub hand_capacity: usize,

    /// Cards the hand is topped up towards at each turn start.
    pub base_draw: u32,

    /// Genre weights used to build the turn schedule.
    pub genre_weights: GenreWeights,

    /// Size of one banked fixed-score unit for active cards.
    pub fixed_score_unit: i64,

    /// Every this many card plays the encore mechanic scores a bonus.
    pub encore_interval: u32,

    /// Base power of the encore bonus.
    pub encore_bonus: i64,

    /// Shuffle seed. `None` draws one from entropy at construction.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_hp: 100,
            initial_energy: 0,
            hand_capacity: 5,
            base_draw: 3,
            genre_weights: GenreWeights::default(),
            fixed_score_unit: 3,
            encore_interval: 5,
            encore_bonus: 4,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the genre weights.
    #[must_use]
    pub fn with_genre_weights(mut self, weights: GenreWeights) -> Self {
        self.genre_weights = weights;
        self
    }

    /// Override the starting energy.
    #[must_use]
    pub fn with_initial_energy(mut self, energy: i64) -> Self {
        self.initial_energy = energy;
        self
    }

    /// Override the starting HP.
    #[must_use]
    pub fn with_max_hp(mut self, hp: i64) -> Self {
        self.max_hp = hp;
        self
    }
}
