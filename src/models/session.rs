//! Session snapshot (roster, selection, settings, pending matches) and its errors.

use crate::models::game::{GameMatch, GameMode};
use crate::models::player::{Gender, Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Why match generation refused to produce a proposal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenerateError {
    /// Fewer selected players than the mode and court count require.
    InsufficientTotalPlayers { needed: usize, available: usize },
    /// More must-play players than slots. `gender` is set when the limit is per gender.
    PriorityOverflow {
        gender: Option<Gender>,
        priority: usize,
        slots: usize,
    },
    /// Not enough regular players of `gender` to fill the slots left after priority players.
    GenderShortage {
        gender: Gender,
        needed: usize,
        available: usize,
    },
    /// Fewer courts were filled than requested after all checks passed.
    InternalShortfall { requested: usize, produced: usize },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InsufficientTotalPlayers { needed, available } => write!(
                f,
                "Not enough players: this mode needs {} players but only {} are selected",
                needed, available
            ),
            GenerateError::PriorityOverflow {
                gender: None,
                priority,
                slots,
            } => write!(
                f,
                "Too many must-play players ({}) for the {} available slots",
                priority, slots
            ),
            GenerateError::PriorityOverflow {
                gender: Some(g),
                priority,
                slots,
            } => write!(
                f,
                "Too many must-play {} players ({}) for the {} {} slots",
                g, priority, slots, g
            ),
            GenerateError::GenderShortage {
                gender,
                needed,
                available,
            } => write!(
                f,
                "Not enough {} players: {} more needed but only {} available",
                gender, needed, available
            ),
            GenerateError::InternalShortfall { requested, produced } => write!(
                f,
                "Unexpected error: generated {} of {} requested courts",
                produced, requested
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Errors returned by session commands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// No player with this id on the roster.
    PlayerNotFound(PlayerId),
    /// Player names must not be blank.
    EmptyName,
    /// Courts must be between 1 and `MAX_COURTS`.
    InvalidCourtCount(usize),
    Generate(GenerateError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::PlayerNotFound(_) => write!(f, "Player not found"),
            SessionError::EmptyName => write!(f, "Player name must not be empty"),
            SessionError::InvalidCourtCount(n) => write!(
                f,
                "Number of courts must be between 1 and {} (got {})",
                MAX_COURTS, n
            ),
            SessionError::Generate(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Generate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GenerateError> for SessionError {
    fn from(e: GenerateError) -> Self {
        SessionError::Generate(e)
    }
}

fn default_courts() -> usize {
    1
}

/// Largest court count whose slot total fits in `usize` for every mode.
pub const MAX_COURTS: usize = usize::MAX / 4;

/// Everything the match maker works on. Commands take a snapshot and return a new one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Full roster, in the order players were added.
    pub players: Vec<Player>,
    /// Players taking part in the next generation.
    pub selected_ids: BTreeSet<PlayerId>,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default = "default_courts")]
    pub courts: usize,
    /// Pending proposal; empty until generated, cleared on confirm or settings change.
    #[serde(default)]
    pub matches: Vec<GameMatch>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            selected_ids: BTreeSet::new(),
            mode: GameMode::default(),
            courts: default_courts(),
            matches: Vec::new(),
        }
    }
}

impl Session {
    /// Session over a stored roster, with default settings and nothing pending.
    pub fn with_roster(players: Vec<Player>, selected_ids: BTreeSet<PlayerId>) -> Self {
        Self {
            players,
            selected_ids,
            ..Self::default()
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: PlayerId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Selected players, in roster order.
    pub fn selected_players(&self) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| self.selected_ids.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Players needed to fill every court in the current mode.
    pub fn players_needed(&self) -> usize {
        self.mode.players_per_match().saturating_mul(self.courts)
    }

    /// Resolve a match's teams to players (for display). Unknown ids are skipped.
    pub fn match_players(&self, m: &GameMatch) -> (Vec<&Player>, Vec<&Player>) {
        let resolve = |ids: &[PlayerId]| -> Vec<&Player> {
            ids.iter().filter_map(|&id| self.player(id)).collect()
        };
        (resolve(&m.team_a), resolve(&m.team_b))
    }
}
