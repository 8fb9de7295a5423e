//! Card system: cards, drinks, characters, and the name-keyed registry.
//!
//! ## Key Types
//!
//! - `Card`: cost, category, effect, and disposal rules of a playable card
//! - `Drink`: free single-use consumable
//! - `Character`: genre preferences, signature card and item, turn events
//! - `Registry`: catalog lookup by unique name

pub mod character;
pub mod consumable;
pub mod definition;
pub mod registry;

pub use character::Character;
pub use consumable::Drink;
pub use definition::{Card, CardCategory, Cost, CostKind, Rarity, PLACEHOLDER_ART};
pub use registry::{Named, Registry};
