//! Data structures for the match maker: players, game modes, matches, session state.

mod game;
mod player;
mod session;

pub use game::{GameMatch, GameMode};
pub use player::{Gender, Player, PlayerId};
pub use session::{GenerateError, Session, SessionError, MAX_COURTS};
