//! Match maker business logic: fairness selection, validation, team composition, commands.

mod commands;
mod composer;
mod confirm;
mod selection;
mod validation;

pub use commands::{apply, Command, CommandOutcome};
pub use composer::{compose_mixed, compose_plan, compose_uniform, generate_matches};
pub use confirm::confirm_matches;
pub use selection::{select_players, shuffled};
pub use validation::{plan_generation, GenerationPlan, PoolPlan, SlotPool};
