//! P-item triggers.
//!
//! ## Key Types
//!
//! - [`PItem`]: a passive item with a condition and an effect
//! - [`TriggerPoint`]: the point in a turn where an item is checked
//!
//! Items are checked in the order they were given to the session; the
//! character's signature item is always first.

mod item;

pub use item::{PItem, TriggerPoint};
