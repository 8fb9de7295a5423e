//! Permanent buffs: deck-long modifiers that never decay.

use serde::{Deserialize, Serialize};

/// A permanent modifier key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermanentBuff {
    /// Concentration gained whenever a mental card is played.
    MentalConc,
    /// Concentration gained whenever an active card is played.
    ActiveConc,
    /// Banked fixed score, cashed in units by active cards.
    ActiveScoreFixed,
    /// Concentration gained at every turn end.
    TurnEndConc,
}

impl PermanentBuff {
    pub const ALL: [PermanentBuff; 4] = [
        PermanentBuff::MentalConc,
        PermanentBuff::ActiveConc,
        PermanentBuff::ActiveScoreFixed,
        PermanentBuff::TurnEndConc,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            PermanentBuff::MentalConc => "mental_conc",
            PermanentBuff::ActiveConc => "active_conc",
            PermanentBuff::ActiveScoreFixed => "active_score_fixed",
            PermanentBuff::TurnEndConc => "turn_end_conc",
        }
    }
}

impl std::fmt::Display for PermanentBuff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Accumulated permanent buffs for one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentBuffs {
    pub mental_conc: i64,
    pub active_conc: i64,
    pub active_score_fixed: i64,
    pub turn_end_conc: i64,
}

impl PermanentBuffs {
    #[must_use]
    pub fn get(&self, buff: PermanentBuff) -> i64 {
        match buff {
            PermanentBuff::MentalConc => self.mental_conc,
            PermanentBuff::ActiveConc => self.active_conc,
            PermanentBuff::ActiveScoreFixed => self.active_score_fixed,
            PermanentBuff::TurnEndConc => self.turn_end_conc,
        }
    }

    pub fn add(&mut self, buff: PermanentBuff, amount: i64) {
        let slot = match buff {
            PermanentBuff::MentalConc => &mut self.mental_conc,
            PermanentBuff::ActiveConc => &mut self.active_conc,
            PermanentBuff::ActiveScoreFixed => &mut self.active_score_fixed,
            PermanentBuff::TurnEndConc => &mut self.turn_end_conc,
        };
        *slot += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut buffs = PermanentBuffs::default();
        buffs.add(PermanentBuff::ActiveScoreFixed, 3);
        buffs.add(PermanentBuff::ActiveScoreFixed, 3);
        buffs.add(PermanentBuff::TurnEndConc, 2);

        assert_eq!(buffs.get(PermanentBuff::ActiveScoreFixed), 6);
        assert_eq!(buffs.turn_end_conc, 2);
        assert_eq!(buffs.get(PermanentBuff::MentalConc), 0);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = PermanentBuff::ALL.iter().map(|b| b.to_string()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), PermanentBuff::ALL.len());
    }
}
