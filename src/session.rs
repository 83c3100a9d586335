use log::warn;

use crate::config::MatchConfig;
use crate::error::{ConfigError, MatchError};
use crate::model::DieOutcome;
use crate::rng::DieSource;
use crate::state::MatchState;

/// Holds the match a front end is currently showing, if any.
#[derive(Debug)]
pub struct Session<D> {
    current: Option<MatchState<D>>,
}

impl<D> Default for Session<D> {
    fn default() -> Self { Session { current: None } }
}

impl<D: DieSource> Session<D> {
    pub fn new() -> Self { Self::default() }

    /// Replaces whatever match was running.
    pub fn start(
        &mut self,
        config: MatchConfig,
        names: Vec<String>,
        die: D,
    ) -> Result<&MatchState<D>, ConfigError> {
        let m = MatchState::new(config, names, die)?;
        Ok(&*self.current.insert(m))
    }

    pub fn roll(&mut self) -> Result<DieOutcome, MatchError> { self.active()?.roll() }

    pub fn bank(&mut self) -> Result<u32, MatchError> { self.active()?.bank() }

    pub fn current(&self) -> Option<&MatchState<D>> { self.current.as_ref() }

    pub fn take(&mut self) -> Option<MatchState<D>> { self.current.take() }

    fn active(&mut self) -> Result<&mut MatchState<D>, MatchError> {
        self.current.as_mut().ok_or_else(|| {
            warn!("no match has been started");
            MatchError::InvalidState
        })
    }
}
