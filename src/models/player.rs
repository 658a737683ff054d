//! Player and Gender data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, selection and lookups).
pub type PlayerId = Uuid;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A player on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gender: Gender,
    /// Number of confirmed matches this player appeared in.
    #[serde(default)]
    pub play_count: u32,
    /// Must be included in the next generated match.
    #[serde(default)]
    pub priority: bool,
}

impl Player {
    /// Create a new player with the given name and gender. Play count starts at zero, no priority.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            gender,
            play_count: 0,
            priority: false,
        }
    }

    /// Record one confirmed match appearance. Stops at `u32::MAX`.
    pub fn record_play(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }

    pub fn toggle_priority(&mut self) {
        self.priority = !self.priority;
    }
}
