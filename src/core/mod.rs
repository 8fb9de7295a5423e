//! Core engine types: state, commands, configuration, RNG, log, errors.
//!
//! Everything here is independent of the catalog content. A session is
//! configured through `SessionConfig` rather than by modifying the engine.

pub mod action;
pub mod config;
pub mod error;
pub mod log;
pub mod rng;
pub mod state;

pub use action::{Action, PlayRecord};
pub use config::{GenreWeight, GenreWeights, SessionConfig, MAX_DRINK_SLOTS, MAX_TURNS};
pub use error::SessionError;
pub use log::GameLog;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
