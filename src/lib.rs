//! Badminton match maker: library with models, fair team generation and roster storage.

pub mod logic;
pub mod models;
pub mod roster;
pub mod store;

pub use logic::{
    apply, compose_mixed, compose_plan, compose_uniform, confirm_matches, generate_matches,
    plan_generation, select_players, shuffled, Command, CommandOutcome, GenerationPlan, PoolPlan,
    SlotPool,
};
pub use models::{
    GameMatch, GameMode, Gender, GenerateError, Player, PlayerId, Session, SessionError,
    MAX_COURTS,
};
pub use roster::{export_csv, import_csv, parse_names, RosterEntry, RosterError};
pub use store::{JsonFileStore, StoreError, StoredRoster};
