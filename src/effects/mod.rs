//! Effect system for cards, P-items, drinks, and turn events.
//!
//! - `Effect`: data-driven opcodes for every rule the catalog needs
//! - `Condition`: predicates gating card use and P-item triggers
//! - `EffectResolver`: executes effects on game state
//!
//! ## Design Philosophy
//!
//! Catalog entries carry effects as plain data instead of closures, so a
//! definition can be cloned into a session, compared, and serialized for a
//! renderer. Anything an effect can do is a variant here.

mod condition;
mod effect;
mod resolver;

pub use condition::Condition;
pub use effect::Effect;
pub use resolver::EffectResolver;
