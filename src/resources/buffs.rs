//! Temporary buffs.
//!
//! The temporary buff set is closed, so counters live in a fixed-field
//! [`BuffTable`] addressed by [`TempBuff`]. The same table shape holds the
//! per-turn protection flags.

use serde::{Deserialize, Serialize};

/// A turn-counted modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempBuff {
    /// ×1.5 score multiplier while active.
    GoodCondition,
    /// Adds 0.1 per good-condition stack on top of good condition.
    SuperGood,
    /// Concentration gains ×1.5, rounded up.
    ConcBoost,
    /// +10% parameter boost per stack.
    ParamBoost,
    /// Flat +30% parameter boost while active.
    ParamBoost30,
}

impl TempBuff {
    /// Every temporary buff, in display order.
    pub const ALL: [TempBuff; 5] = [
        TempBuff::GoodCondition,
        TempBuff::SuperGood,
        TempBuff::ConcBoost,
        TempBuff::ParamBoost,
        TempBuff::ParamBoost30,
    ];

    /// Stable snake_case key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            TempBuff::GoodCondition => "good_condition",
            TempBuff::SuperGood => "super_good",
            TempBuff::ConcBoost => "conc_boost",
            TempBuff::ParamBoost => "param_boost",
            TempBuff::ParamBoost30 => "param_boost_30",
        }
    }
}

impl std::fmt::Display for TempBuff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One value per temporary buff.
///
/// `BuffTable<i32>` holds turn counters, `BuffTable<bool>` holds the
/// "do not decay this turn" flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffTable<T> {
    pub good_condition: T,
    pub super_good: T,
    pub conc_boost: T,
    pub param_boost: T,
    pub param_boost_30: T,
}

impl<T: Copy> BuffTable<T> {
    /// Build a table from a function of the key.
    pub fn from_fn(mut f: impl FnMut(TempBuff) -> T) -> Self {
        Self {
            good_condition: f(TempBuff::GoodCondition),
            super_good: f(TempBuff::SuperGood),
            conc_boost: f(TempBuff::ConcBoost),
            param_boost: f(TempBuff::ParamBoost),
            param_boost_30: f(TempBuff::ParamBoost30),
        }
    }

    #[must_use]
    pub fn get(&self, buff: TempBuff) -> T {
        match buff {
            TempBuff::GoodCondition => self.good_condition,
            TempBuff::SuperGood => self.super_good,
            TempBuff::ConcBoost => self.conc_boost,
            TempBuff::ParamBoost => self.param_boost,
            TempBuff::ParamBoost30 => self.param_boost_30,
        }
    }

    pub fn get_mut(&mut self, buff: TempBuff) -> &mut T {
        match buff {
            TempBuff::GoodCondition => &mut self.good_condition,
            TempBuff::SuperGood => &mut self.super_good,
            TempBuff::ConcBoost => &mut self.conc_boost,
            TempBuff::ParamBoost => &mut self.param_boost,
            TempBuff::ParamBoost30 => &mut self.param_boost_30,
        }
    }

    /// Iterate `(key, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TempBuff, T)> + '_ {
        TempBuff::ALL.into_iter().map(|buff| (buff, self.get(buff)))
    }
}

/// Turn counters for every temporary buff.
///
/// Counters are signed: an effect may remove a stack from a buff that has
/// none, leaving it below zero until raised again.
pub type Buffs = BuffTable<i32>;

/// Per-turn decay protection flags.
pub type BuffProtection = BuffTable<bool>;

impl BuffTable<i32> {
    /// Check if a buff has a positive counter.
    #[must_use]
    pub fn is_active(&self, buff: TempBuff) -> bool {
        self.get(buff) > 0
    }

    /// Protection flags for a new turn: a buff at exactly 0 is protected, so
    /// a stack granted later this turn survives the turn's decay.
    #[must_use]
    pub fn protection_snapshot(&self) -> BuffProtection {
        BuffTable::from_fn(|buff| self.get(buff) == 0)
    }

    /// Decay every positive, unprotected counter by one.
    pub fn decay(&mut self, protection: &BuffProtection) {
        for buff in TempBuff::ALL {
            let counter = self.get_mut(buff);
            if *counter > 0 && !protection.get(buff) {
                *counter -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut buffs = Buffs::default();
        *buffs.get_mut(TempBuff::SuperGood) += 4;

        assert_eq!(buffs.get(TempBuff::SuperGood), 4);
        assert_eq!(buffs.super_good, 4);
        assert!(buffs.is_active(TempBuff::SuperGood));
        assert!(!buffs.is_active(TempBuff::GoodCondition));
    }

    #[test]
    fn test_protection_snapshot() {
        let buffs = Buffs {
            good_condition: 3,
            super_good: 0,
            conc_boost: -1,
            param_boost: 0,
            param_boost_30: 1,
        };
        let protection = buffs.protection_snapshot();

        assert!(!protection.good_condition);
        assert!(protection.super_good);
        assert!(!protection.conc_boost);
        assert!(protection.param_boost);
        assert!(!protection.param_boost_30);
    }

    #[test]
    fn test_decay_skips_protected_and_non_positive() {
        let mut buffs = Buffs {
            good_condition: 3,
            super_good: 2,
            conc_boost: -1,
            param_boost: 0,
            param_boost_30: 1,
        };
        let mut protection = BuffProtection::default();
        protection.super_good = true;

        buffs.decay(&protection);

        assert_eq!(buffs.good_condition, 2);
        assert_eq!(buffs.super_good, 2);
        assert_eq!(buffs.conc_boost, -1);
        assert_eq!(buffs.param_boost, 0);
        assert_eq!(buffs.param_boost_30, 0);
    }

    #[test]
    fn test_keys() {
        let keys: Vec<_> = TempBuff::ALL.iter().map(|b| b.key()).collect();
        assert_eq!(
            keys,
            ["good_condition", "super_good", "conc_boost", "param_boost", "param_boost_30"]
        );
        assert_eq!(TempBuff::ParamBoost30.to_string(), "param_boost_30");
    }

    #[test]
    fn test_iter_order() {
        let buffs = BuffTable::from_fn(|b| b.key().len());
        let values: Vec<_> = buffs.iter().map(|(_, v)| v).collect();
        assert_eq!(values, [14, 10, 10, 11, 14]);
    }
}
