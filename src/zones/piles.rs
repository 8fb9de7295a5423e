//! Card piles: deck, hand, discard, exile.
//!
//! Every card of a session is in exactly one pile. The deck is drawn from
//! its end; when it runs dry the discard pile is shuffled back in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::GameRng;

/// Inline capacity of the hand. Matches the default hand limit so a normal
/// hand never allocates.
pub const HAND_INLINE: usize = 5;

/// The four card piles of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Piles {
    /// Draw pile. The last element is the top card.
    pub deck: Vec<Card>,
    pub hand: SmallVec<[Card; HAND_INLINE]>,
    pub discard: Vec<Card>,
    /// Cards consumed by single-use plays.
    pub exile: Vec<Card>,
}

impl Piles {
    /// Piles with `deck` as the draw pile.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// Draw up to `count` cards, one at a time.
    ///
    /// Stops early when the hand reaches `capacity` or when both the deck
    /// and the discard pile are empty. Returns the number of cards drawn.
    pub fn draw(&mut self, count: u32, capacity: usize, rng: &mut GameRng) -> u32 {
        let mut drawn = 0;
        for _ in 0..count {
            if self.hand.len() >= capacity {
                break;
            }
            if self.deck.is_empty() && !self.recycle_discard(rng) {
                break;
            }
            match self.deck.pop() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Shuffle the discard pile into the empty deck. Returns false when
    /// there was nothing to recycle.
    fn recycle_discard(&mut self, rng: &mut GameRng) -> bool {
        if self.discard.is_empty() {
            return false;
        }
        self.deck = std::mem::take(&mut self.discard);
        rng.shuffle(&mut self.deck);
        tracing::trace!(cards = self.deck.len(), "discard reshuffled into deck");
        true
    }

    /// Remove the card at `index` from the hand.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Move the whole hand to the discard pile. Returns how many cards moved.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        self.discard.extend(self.hand.drain(..));
        count
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len() + self.exile.len()
    }
}
