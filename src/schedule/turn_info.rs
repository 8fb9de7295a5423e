//! The per-session turn schedule.
//!
//! Every session has [`MAX_TURNS`] slots, each tagged with a genre, a score
//! weight, and a display color. Four positions are pinned; the other eight
//! come from a shuffled bag weighted towards the character's first
//! preference.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GenreWeight, GenreWeights, MAX_TURNS};

/// Performance genre of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Dance,
    Visual,
    Vocal,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Dance => write!(f, "dance"),
            Genre::Visual => write!(f, "visual"),
            Genre::Vocal => write!(f, "vocal"),
        }
    }
}

/// Display colors by preference rank.
pub const PREFERENCE_COLORS: [&str; 3] = ["#1f77b4", "#ffcc00", "#d62728"];

/// Slots pinned to a preference rank, as `(slot index, rank)`.
const PINNED: [(usize, usize); 4] = [(0, 0), (11, 0), (9, 2), (10, 1)];

/// Bag composition for the unpinned slots, by preference rank.
const BAG: [(usize, usize); 3] = [(0, 4), (1, 3), (2, 1)];

/// One slot of the turn schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnInfo {
    pub genre: Genre,
    /// Score weight for this turn.
    pub weight: GenreWeight,
    /// Display color.
    pub color: String,
}

impl TurnInfo {
    fn for_rank(genres: &[Genre; 3], weights: &GenreWeights, rank: usize) -> Self {
        Self {
            genre: genres[rank],
            weight: weights.weight(rank),
            color: PREFERENCE_COLORS[rank].to_string(),
        }
    }
}

/// The twelve turn slots of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnSchedule {
    slots: Vec<TurnInfo>,
}

impl TurnSchedule {
    /// Generate a schedule from genre preferences (most preferred first).
    pub fn generate(genres: &[Genre; 3], weights: &GenreWeights, rng: &mut GameRng) -> Self {
        let mut ranks: [Option<usize>; MAX_TURNS as usize] = [None; MAX_TURNS as usize];
        for (slot, rank) in PINNED {
            ranks[slot] = Some(rank);
        }

        let mut bag: Vec<usize> = BAG
            .iter()
            .flat_map(|&(rank, count)| std::iter::repeat(rank).take(count))
            .collect();
        rng.shuffle(&mut bag);

        let slots = ranks
            .into_iter()
            .map(|pinned| {
                let rank = pinned.or_else(|| bag.pop()).unwrap_or(0);
                TurnInfo::for_rank(genres, weights, rank)
            })
            .collect();

        Self { slots }
    }

    #[cfg(test)]
    pub(crate) fn slot(&self, turn: u32) -> &TurnInfo {
        &self.slots[turn as usize - 1]
    }

    /// The slot for a 1-indexed turn, if it is on the schedule.
    #[must_use]
    pub fn get(&self, turn: u32) -> Option<&TurnInfo> {
        turn.checked_sub(1).and_then(|i| self.slots.get(i as usize))
    }

    /// Score weight for a turn. Turns past the end use the last slot.
    #[must_use]
    pub fn weight(&self, turn: u32) -> GenreWeight {
        self.get(turn)
            .or_else(|| self.slots.last())
            .map_or(GenreWeight::UNIT, |slot| slot.weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnInfo> {
        self.slots.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFS: [Genre; 3] = [Genre::Dance, Genre::Visual, Genre::Vocal];

    fn generate(seed: u64) -> TurnSchedule {
        TurnSchedule::generate(&PREFS, &GenreWeights::default(), &mut GameRng::new(seed))
    }

    #[test]
    fn test_pinned_slots() {
        for seed in 0..20 {
            let schedule = generate(seed);
            assert_eq!(schedule.len(), 12);
            assert_eq!(schedule.slot(1).genre, Genre::Dance);
            assert_eq!(schedule.slot(12).genre, Genre::Dance);
            assert_eq!(schedule.slot(10).genre, Genre::Vocal);
            assert_eq!(schedule.slot(11).genre, Genre::Visual);
        }
    }

    #[test]
    fn test_bag_composition() {
        for seed in 0..20 {
            let schedule = generate(seed);
            let count = |genre| schedule.iter().filter(|s| s.genre == genre).count();
            assert_eq!(count(Genre::Dance), 6);
            assert_eq!(count(Genre::Visual), 4);
            assert_eq!(count(Genre::Vocal), 2);
        }
    }

    #[test]
    fn test_weights_and_colors_follow_rank() {
        let schedule = generate(1);
        for slot in schedule.iter() {
            let (shares, color) = match slot.genre {
                Genre::Dance => (19.0, "#1f77b4"),
                Genre::Visual => (14.0, "#ffcc00"),
                Genre::Vocal => (8.0, "#d62728"),
            };
            assert_eq!(slot.weight.shares, shares);
            assert_eq!(slot.weight.scale, 100.0);
            assert_eq!(slot.color, color);
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        assert_eq!(generate(77), generate(77));
    }

    #[test]
    fn test_weight_clamps_past_end() {
        let schedule = generate(3);
        assert_eq!(schedule.weight(13), schedule.slot(12).weight);
        assert!(schedule.get(0).is_none());
        assert!(schedule.get(13).is_none());
    }
}
