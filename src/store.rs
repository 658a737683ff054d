//! Roster persistence: the whole roster and selection as one JSON record on disk.

use crate::models::{Player, PlayerId, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Errors while writing or clearing the stored roster.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Roster storage I/O error: {}", e),
            StoreError::Json(e) => write!(f, "Roster storage encoding error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// What gets persisted: players and which of them are selected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredRoster {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub selected_ids: BTreeSet<PlayerId>,
    /// When this record was written. Informational only.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl StoredRoster {
    pub fn from_session(session: &Session) -> Self {
        Self {
            players: session.players.clone(),
            selected_ids: session.selected_ids.clone(),
            saved_at: None,
        }
    }

    /// Session with default settings over this roster.
    pub fn into_session(self) -> Session {
        Session::with_roster(self.players, self.selected_ids)
    }

    /// Drop selected ids that name no player.
    fn prune_selection(&mut self) {
        let known: BTreeSet<PlayerId> = self.players.iter().map(|p| p.id).collect();
        self.selected_ids.retain(|id| known.contains(id));
    }
}

/// JSON file holding one `StoredRoster`. Every save overwrites the whole file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored roster. A missing, unreadable or corrupt file yields an empty roster.
    pub fn load(&self) -> StoredRoster {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no roster at {}, starting empty", self.path.display());
                return StoredRoster::default();
            }
            Err(e) => {
                log::warn!("failed to read roster from {}: {}", self.path.display(), e);
                return StoredRoster::default();
            }
        };
        match serde_json::from_str::<StoredRoster>(&data) {
            Ok(mut roster) => {
                roster.prune_selection();
                log::info!(
                    "loaded {} player(s) from {}",
                    roster.players.len(),
                    self.path.display()
                );
                roster
            }
            Err(e) => {
                log::warn!("ignoring corrupt roster at {}: {}", self.path.display(), e);
                StoredRoster::default()
            }
        }
    }

    /// Overwrite the stored roster, stamping `saved_at`.
    pub fn save(&self, roster: &StoredRoster) -> Result<(), StoreError> {
        let record = StoredRoster {
            saved_at: Some(Utc::now()),
            ..roster.clone()
        };
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, json)?;
        log::debug!("saved {} player(s) to {}", record.players.len(), self.path.display());
        Ok(())
    }

    /// Remove the stored record. Removing a record that does not exist is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
