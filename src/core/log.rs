//! Player-facing event log.
//!
//! The log is an ordered sequence of human-readable lines for the current
//! turn. It is cleared at every turn start and is never read back by engine
//! logic. Each line is also emitted as a `tracing` event so a subscriber can
//! follow a whole session.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Append-only log of the current turn's events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    lines: Vector<String>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "idol_stage::log", "{line}");
        self.lines.push_back(line);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Count lines containing `needle`.
    #[must_use]
    pub fn count_matching(&self, needle: &str) -> usize {
        self.iter().filter(|line| line.contains(needle)).count()
    }
}
