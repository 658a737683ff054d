//! Confirmation: commit a proposal by bumping each participant's play count once.

use crate::models::{GameMatch, Player, PlayerId};
use std::collections::HashSet;

/// Return the roster with play count +1 for every distinct player in `matches`.
pub fn confirm_matches(players: &[Player], matches: &[GameMatch]) -> Vec<Player> {
    let participants: HashSet<PlayerId> = matches.iter().flat_map(|m| m.player_ids()).collect();
    players
        .iter()
        .cloned()
        .map(|mut p| {
            if participants.contains(&p.id) {
                p.record_play();
            }
            p
        })
        .collect()
}
