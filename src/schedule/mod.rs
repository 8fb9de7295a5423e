//! Turn schedule and deferred effects.
//!
//! ## Key Types
//!
//! - `TurnSchedule`: genre, weight, and color for each of the twelve turns
//! - `DeferredSchedule`: draws and effects reserved for a later turn
//! - `RecurringEffect`: an effect repeated at each of the next N turn starts

mod deferred;
mod recurring;
mod turn_info;

pub use deferred::DeferredSchedule;
pub use recurring::RecurringEffect;
pub use turn_info::{Genre, TurnInfo, TurnSchedule, PREFERENCE_COLORS};
