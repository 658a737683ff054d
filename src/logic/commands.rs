//! Session commands: every user intent takes a snapshot and returns a new one.

use crate::logic::composer::generate_matches;
use crate::logic::confirm::confirm_matches;
use crate::models::{
    GameMode, Gender, Player, PlayerId, Session, SessionError, MAX_COURTS,
};
use crate::roster::{parse_names, RosterEntry};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A user intent against the session.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddPlayer { name: String, gender: Gender },
    /// Bulk entry: one string holding several names (see `parse_names`).
    AddPlayers { names: String, gender: Gender },
    ImportRoster { entries: Vec<RosterEntry> },
    DeletePlayer { id: PlayerId },
    ToggleSelection { id: PlayerId },
    TogglePriority { id: PlayerId },
    SelectAll,
    SelectNone,
    /// Remove every player and the selection.
    ClearAll,
    SetMode { mode: GameMode },
    SetCourts { courts: usize },
    Generate,
    Confirm,
}

impl Command {
    /// Whether a successful run changes what the roster store holds (players or selection).
    pub fn touches_roster(&self) -> bool {
        !matches!(
            self,
            Command::SetMode { .. } | Command::SetCourts { .. } | Command::Generate
        )
    }
}

/// Result of applying a command. On error `session` equals the input snapshot, except that a
/// failed `Generate` still discards the previous proposal.
#[derive(Clone, Debug)]
pub struct CommandOutcome {
    pub session: Session,
    pub error: Option<SessionError>,
}

impl CommandOutcome {
    pub fn into_result(self) -> Result<Session, SessionError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.session),
        }
    }
}

/// Apply `command` to `session` without mutating it.
pub fn apply<R: Rng + ?Sized>(session: &Session, command: Command, rng: &mut R) -> CommandOutcome {
    let regenerating = matches!(command, Command::Generate);
    let mut next = session.clone();
    match run(&mut next, command, rng) {
        Ok(()) => CommandOutcome {
            session: next,
            error: None,
        },
        Err(e) => {
            log::debug!("command rejected: {}", e);
            let mut unchanged = session.clone();
            if regenerating {
                unchanged.matches.clear();
            }
            CommandOutcome {
                session: unchanged,
                error: Some(e),
            }
        }
    }
}

fn run<R: Rng + ?Sized>(
    s: &mut Session,
    command: Command,
    rng: &mut R,
) -> Result<(), SessionError> {
    match command {
        Command::AddPlayer { name, gender } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(SessionError::EmptyName);
            }
            add_players(s, vec![Player::new(name, gender)]);
        }
        Command::AddPlayers { names, gender } => {
            let players = parse_names(&names)
                .into_iter()
                .map(|n| Player::new(n, gender))
                .collect::<Vec<_>>();
            if players.is_empty() {
                return Err(SessionError::EmptyName);
            }
            add_players(s, players);
        }
        Command::ImportRoster { entries } => {
            if entries.iter().any(|e| e.name.trim().is_empty()) {
                return Err(SessionError::EmptyName);
            }
            add_players(s, entries.into_iter().map(RosterEntry::into_player).collect());
        }
        Command::DeletePlayer { id } => {
            let idx = s
                .players
                .iter()
                .position(|p| p.id == id)
                .ok_or(SessionError::PlayerNotFound(id))?;
            s.players.remove(idx);
            s.selected_ids.remove(&id);
            selection_changed(s);
        }
        Command::ToggleSelection { id } => {
            if s.player(id).is_none() {
                return Err(SessionError::PlayerNotFound(id));
            }
            if !s.selected_ids.remove(&id) {
                s.selected_ids.insert(id);
            }
            selection_changed(s);
        }
        Command::TogglePriority { id } => {
            s.player_mut(id)
                .ok_or(SessionError::PlayerNotFound(id))?
                .toggle_priority();
        }
        Command::SelectAll => {
            s.selected_ids = s.players.iter().map(|p| p.id).collect();
            selection_changed(s);
        }
        Command::SelectNone => {
            s.selected_ids.clear();
            selection_changed(s);
        }
        Command::ClearAll => {
            s.players.clear();
            s.selected_ids.clear();
            selection_changed(s);
        }
        Command::SetMode { mode } => {
            s.mode = mode;
            s.matches.clear();
        }
        Command::SetCourts { courts } => {
            if courts == 0 || courts > MAX_COURTS {
                return Err(SessionError::InvalidCourtCount(courts));
            }
            s.courts = courts;
            s.matches.clear();
        }
        Command::Generate => {
            s.matches = generate_matches(&s.selected_players(), s.mode, s.courts, rng)?;
        }
        Command::Confirm => {
            if s.matches.is_empty() {
                return Ok(());
            }
            s.players = confirm_matches(&s.players, &s.matches);
            log::info!("confirmed {} match(es)", s.matches.len());
            s.matches.clear();
        }
    }
    Ok(())
}

/// New players join the roster and the selection.
fn add_players(s: &mut Session, players: Vec<Player>) {
    for p in &players {
        s.selected_ids.insert(p.id);
    }
    log::debug!("added {} player(s)", players.len());
    s.players.extend(players);
    selection_changed(s);
}

/// A different selection invalidates the pending proposal.
fn selection_changed(s: &mut Session) {
    s.matches.clear();
}
