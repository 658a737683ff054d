//! Integration tests for roster persistence and CSV import/export.

use badminton_match_maker::{
    export_csv, import_csv, parse_names, Gender, JsonFileStore, Player, RosterError, Session,
    StoredRoster,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Unique file path under the system temp dir; removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("roster-{}.json", uuid::Uuid::new_v4())))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn sample_roster() -> StoredRoster {
    let mut a = Player::new("Ann", Gender::Female);
    a.play_count = 3;
    a.priority = true;
    let b = Player::new("Ben", Gender::Male);
    StoredRoster {
        selected_ids: BTreeSet::from([a.id]),
        players: vec![a, b],
        saved_at: None,
    }
}

#[test]
fn missing_file_loads_empty() {
    let file = TempFile::new();
    let store = JsonFileStore::new(&file.0);
    let roster = store.load();
    assert!(roster.players.is_empty());
    assert!(roster.selected_ids.is_empty());
}

#[test]
fn save_then_load_keeps_players_and_selection() {
    let file = TempFile::new();
    let store = JsonFileStore::new(&file.0);
    let roster = sample_roster();
    store.save(&roster).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.players, roster.players);
    assert_eq!(loaded.selected_ids, roster.selected_ids);
    assert!(loaded.saved_at.is_some());
}

#[test]
fn corrupt_file_loads_empty() {
    let file = TempFile::new();
    std::fs::write(&file.0, "{ not json").unwrap();
    let roster = JsonFileStore::new(&file.0).load();
    assert_eq!(roster.players.len(), 0);
}

#[test]
fn unknown_selected_ids_are_dropped_on_load() {
    let file = TempFile::new();
    let mut roster = sample_roster();
    let stray = Player::new("gone", Gender::Male).id;
    roster.selected_ids.insert(stray);
    JsonFileStore::new(&file.0).save(&roster).unwrap();

    let loaded = JsonFileStore::new(&file.0).load();
    assert!(!loaded.selected_ids.contains(&stray));
    assert_eq!(loaded.selected_ids.len(), 1);
}

#[test]
fn clear_removes_record_and_tolerates_missing_file() {
    let file = TempFile::new();
    let store = JsonFileStore::new(&file.0);
    store.save(&sample_roster()).unwrap();
    store.clear().unwrap();
    assert!(!file.0.exists());
    store.clear().unwrap();
}

#[test]
fn roster_round_trips_through_session() {
    let roster = sample_roster();
    let session = roster.clone().into_session();
    assert_eq!(session.courts, 1);
    assert!(session.matches.is_empty());
    let back = StoredRoster::from_session(&session);
    assert_eq!(back.players, roster.players);
    assert_eq!(back.selected_ids, roster.selected_ids);
    assert_eq!(Session::with_roster(back.players, back.selected_ids), session);
}

#[test]
fn csv_export_has_header_and_rows() {
    let roster = sample_roster();
    let csv = export_csv(&roster.players).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,gender,play_count,priority"));
    assert_eq!(lines.next(), Some("Ann,female,3,true"));
    assert_eq!(lines.next(), Some("Ben,male,0,false"));
}

#[test]
fn csv_import_reads_optional_columns() {
    let data = "name,gender\nCara,female\n Dev , male\n";
    let entries = import_csv(data.as_bytes()).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "Dev");
    assert_eq!(entries[1].gender, Gender::Male);
    assert_eq!(entries[1].play_count, 0);
    assert!(!entries[1].priority);

    let player = entries[0].clone().into_player();
    assert_eq!(player.name, "Cara");
    assert_eq!(player.gender, Gender::Female);
}

#[test]
fn csv_import_rejects_bad_rows() {
    let blank = "name,gender\nCara,female\n  ,male\n";
    assert!(matches!(
        import_csv(blank.as_bytes()),
        Err(RosterError::EmptyName { line: 3 })
    ));
    let bad_gender = "name,gender\nCara,robot\n";
    assert!(matches!(
        import_csv(bad_gender.as_bytes()),
        Err(RosterError::Csv(_))
    ));
}

#[test]
fn parse_names_drops_empty_pieces() {
    assert_eq!(parse_names(" A,,B，、C\tD "), vec!["A", "B", "C", "D"]);
    assert!(parse_names("  ").is_empty());
}
