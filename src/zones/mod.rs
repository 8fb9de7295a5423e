//! Card zones.
//!
//! ## Key Types
//!
//! - `Piles`: deck, hand, discard, and exile of one session

pub mod piles;

pub use piles::{Piles, HAND_INLINE};
