//! Engine for Pig, the push-your-luck dice game.
//!
//! A front end builds a [`MatchConfig`], collects names, creates a
//! [`MatchState`] and then forwards each "roll" or "hold" press to
//! [`MatchState::roll`] / [`MatchState::bank`], rendering a [`Snapshot`]
//! after every call.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod rng;
pub mod rules;
pub mod session;
pub mod state;

pub use config::{MatchConfig, MatchLength, RosterDraft, NAME_POOL};
pub use error::{ConfigError, MatchError};
pub use model::{DieOutcome, Event, EventType, Outcome, Player, PlayerId, Status};
pub use report::{FinalReport, ScoreLine, Snapshot};
pub use rng::{Die, DieSource, ScriptedDie};
pub use session::Session;
pub use state::MatchState;

/// A match with generic "Player N" names and a preset length.
pub fn quick_match<D: DieSource>(
    player_count: usize,
    length: MatchLength,
    die: D,
) -> Result<MatchState<D>, ConfigError> {
    let cfg = MatchConfig::quick(player_count, length)?;
    MatchState::new(cfg, config::placeholder_names(player_count), die)
}
