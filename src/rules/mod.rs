//! Game rules: the turn machine, scoring, session assembly, and summary.
//!
//! ## Key Types
//!
//! - `GameState::{start_turn, play_card, use_drink, end_turn}`: the turn machine
//! - `SessionBuilder`: a session from catalog names
//! - `SessionSummary`: final score and rank
//!
//! Commands never return errors. An invalid command returns `false` and
//! leaves the state as it was, so a driver can probe freely.

pub mod engine;
pub mod scoring;
pub mod session;
pub mod summary;

pub use scoring::{condition_multiplier, parameter_boost, rank, score_delta};
pub use session::SessionBuilder;
pub use summary::SessionSummary;
