//! GameMode and GameMatch: what is played on a court and who plays it.

use crate::models::player::{Gender, PlayerId};
use serde::{Deserialize, Serialize};

/// Game mode chosen for a generation. Decides team size and gender rules.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    AnyDoubles,
    #[default]
    MixedDoubles,
    MensDoubles,
    WomensDoubles,
    MensSingles,
    WomensSingles,
    AnySingles,
}

impl GameMode {
    pub const ALL: [GameMode; 7] = [
        GameMode::AnyDoubles,
        GameMode::MixedDoubles,
        GameMode::MensDoubles,
        GameMode::WomensDoubles,
        GameMode::MensSingles,
        GameMode::WomensSingles,
        GameMode::AnySingles,
    ];

    pub fn is_singles(self) -> bool {
        matches!(
            self,
            GameMode::MensSingles | GameMode::WomensSingles | GameMode::AnySingles
        )
    }

    /// 2 for singles, 4 for doubles.
    pub fn players_per_match(self) -> usize {
        if self.is_singles() {
            2
        } else {
            4
        }
    }

    /// Gender every player must have, for the single-gender modes.
    /// Mixed doubles balances genders per team instead and returns None here.
    pub fn required_gender(self) -> Option<Gender> {
        match self {
            GameMode::MensDoubles | GameMode::MensSingles => Some(Gender::Male),
            GameMode::WomensDoubles | GameMode::WomensSingles => Some(Gender::Female),
            GameMode::AnyDoubles | GameMode::MixedDoubles | GameMode::AnySingles => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::AnyDoubles => "Any doubles",
            GameMode::MixedDoubles => "Mixed doubles",
            GameMode::MensDoubles => "Men's doubles",
            GameMode::WomensDoubles => "Women's doubles",
            GameMode::MensSingles => "Men's singles",
            GameMode::WomensSingles => "Women's singles",
            GameMode::AnySingles => "Any singles",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A proposed match on one court: two teams of 1 (singles) or 2 (doubles) players.
/// Nothing is committed until the proposal is confirmed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    /// Court number, starting at 1.
    pub court: usize,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
}

impl GameMatch {
    pub fn new(court: usize, team_a: Vec<PlayerId>, team_b: Vec<PlayerId>) -> Self {
        Self {
            court,
            team_a,
            team_b,
        }
    }

    /// All players of both teams, team A first.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.team_a.iter().chain(self.team_b.iter()).copied()
    }
}
