//! Roster import/export: bulk name entry and CSV files.

use crate::models::{Gender, Player};
use serde::{Deserialize, Serialize};

/// Errors while reading or writing a CSV roster.
#[derive(Debug)]
pub enum RosterError {
    Csv(csv::Error),
    /// A row has a blank name (1-based line number, header included).
    EmptyName { line: u64 },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Csv(e) => write!(f, "Invalid roster CSV: {}", e),
            RosterError::EmptyName { line } => write!(f, "Empty player name on line {}", line),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Csv(e) => Some(e),
            RosterError::EmptyName { .. } => None,
        }
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}

/// One CSV row. Missing `play_count`/`priority` columns default to 0/false.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub gender: Gender,
    #[serde(default)]
    pub play_count: u32,
    #[serde(default)]
    pub priority: bool,
}

impl RosterEntry {
    /// Fresh player (new id) carrying this entry's data.
    pub fn into_player(self) -> Player {
        let mut p = Player::new(self.name.trim(), self.gender);
        p.play_count = self.play_count;
        p.priority = self.priority;
        p
    }
}

impl From<&Player> for RosterEntry {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            gender: p.gender,
            play_count: p.play_count,
            priority: p.priority,
        }
    }
}

/// Split bulk input into names: separators are ASCII comma, full-width comma,
/// ideographic comma and any whitespace.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c == '，' || c == '、' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write the roster as CSV with header `name,gender,play_count,priority`.
pub fn export_csv(players: &[Player]) -> Result<String, RosterError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for p in players {
        wtr.serialize(RosterEntry::from(p))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| RosterError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read roster entries from CSV (header required).
pub fn import_csv<R: std::io::Read>(reader: R) -> Result<Vec<RosterEntry>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();
    for (row, result) in rdr.deserialize().enumerate() {
        let entry: RosterEntry = result?;
        if entry.name.trim().is_empty() {
            // Row 0 sits on line 2, below the header.
            return Err(RosterError::EmptyName { line: row as u64 + 2 });
        }
        entries.push(entry);
    }
    Ok(entries)
}
