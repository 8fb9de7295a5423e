//! Scalar resources: HP, energy, concentration, score.

use serde::{Deserialize, Serialize};

use crate::cards::{Cost, CostKind};

/// Multiplier applied to concentration gains while the concentration boost
/// is active.
pub const CONC_BOOST_MULTIPLIER: f64 = 1.5;

/// Scale a concentration gain, rounding up.
#[must_use]
pub fn boosted_concentration(amount: i64, boost_active: bool) -> i64 {
    if boost_active {
        (amount as f64 * CONC_BOOST_MULTIPLIER).ceil() as i64
    } else {
        amount
    }
}

/// The player's scalar resources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Never negative.
    pub hp: i64,
    /// Spent before HP when paying resource costs.
    pub energy: i64,
    pub concentration: i64,
    /// Cumulative score.
    pub score: i64,
    /// Score gained since the last reset, for display.
    pub score_gain_display: i64,
}

impl Resources {
    /// Fresh resources for a session.
    #[must_use]
    pub fn new(hp: i64, energy: i64) -> Self {
        Self {
            hp,
            energy,
            concentration: 0,
            score: 0,
            score_gain_display: 0,
        }
    }

    /// Lose HP, flooring at zero.
    pub fn lose_hp(&mut self, amount: i64) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Pay a card cost.
    ///
    /// Concentration costs are subtracted directly. Resource costs drain
    /// energy first and take the shortfall from HP. A negative resource cost
    /// refunds energy.
    pub fn pay(&mut self, cost: Cost) {
        match cost.kind {
            CostKind::Concentration => self.concentration -= cost.amount,
            CostKind::Resource => {
                if self.energy >= cost.amount {
                    self.energy -= cost.amount;
                } else {
                    let shortfall = cost.amount - self.energy;
                    self.energy = 0;
                    self.lose_hp(shortfall);
                }
            }
        }
    }

    /// Record a score delta.
    pub fn add_score(&mut self, delta: i64) {
        self.score += delta;
        self.score_gain_display += delta;
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(100, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boosted_concentration_rounds_up() {
        assert_eq!(boosted_concentration(3, false), 3);
        assert_eq!(boosted_concentration(3, true), 5);
        assert_eq!(boosted_concentration(4, true), 6);
        assert_eq!(boosted_concentration(13, true), 20);
    }

    #[test]
    fn test_pay_from_energy_then_hp() {
        let mut res = Resources::new(100, 4);
        res.pay(Cost::resource(6));
        assert_eq!(res.energy, 0);
        assert_eq!(res.hp, 98);

        let mut res = Resources::new(100, 10);
        res.pay(Cost::resource(6));
        assert_eq!(res.energy, 4);
        assert_eq!(res.hp, 100);
    }

    #[test]
    fn test_pay_floors_hp() {
        let mut res = Resources::new(3, 0);
        res.pay(Cost::resource(7));
        assert_eq!(res.hp, 0);
    }

    #[test]
    fn test_refund_cost() {
        let mut res = Resources::new(100, 0);
        res.pay(Cost::resource(-1));
        assert_eq!(res.energy, 1);
        assert_eq!(res.hp, 100);
    }

    #[test]
    fn test_concentration_cost() {
        let mut res = Resources::new(100, 0);
        res.concentration = 5;
        res.pay(Cost::concentration(3));
        assert_eq!(res.concentration, 2);
    }

    #[test]
    fn test_add_score() {
        let mut res = Resources::default();
        res.add_score(12);
        res.add_score(5);
        assert_eq!(res.score, 17);
        assert_eq!(res.score_gain_display, 17);
    }
}
