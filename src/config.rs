//! Match setup: player/round counts and the roster of names.
//!
//! Everything here runs before a [`MatchState`](crate::MatchState) exists. A
//! `MatchConfig` can only be built through validation, so the state machine
//! never sees an out-of-range count.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::{MAX_PLAYERS, MAX_ROUNDS, MIN_PLAYERS, MIN_ROUNDS};

/// Names offered when players pick who they are.
pub const NAME_POOL: [&str; 15] = [
    "Aitor Tilla", "Ana Conda", "Armando Broncas", "Aurora Boreal", "Bartolo Mesa",
    "Carmen Mente", "Elba Lazo", "Enrique Cido", "Esteban Dido", "Fermin Tado",
    "Lola Mento", "Luz Cuesta", "Paco Tilla", "Pere Gil", "Salvador Tumbado",
];

#[derive(Deserialize)]
struct RawMatchConfig {
    player_count: usize,
    rounds: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    player_count: usize,
    rounds: u32,
}

impl MatchConfig {
    pub fn new(player_count: usize, rounds: u32) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(ConfigError::PlayerCount(player_count));
        }
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
            return Err(ConfigError::RoundsOutOfRange(i64::from(rounds)));
        }
        Ok(MatchConfig { player_count, rounds })
    }

    /// Quick-match setup: a preset length instead of a typed round count.
    pub fn quick(player_count: usize, length: MatchLength) -> Result<Self, ConfigError> {
        MatchConfig::new(player_count, length.rounds())
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn player_count(&self) -> usize { self.player_count }

    pub fn rounds(&self) -> u32 { self.rounds }
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        MatchConfig::new(raw.player_count, raw.rounds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLength { Short, Medium, Long }

impl MatchLength {
    pub fn rounds(self) -> u32 {
        match self { MatchLength::Short => 2, MatchLength::Medium => 4, MatchLength::Long => 6 }
    }
}

/// Parses the round count as typed by a user.
pub fn parse_rounds(text: &str) -> Result<u32, ConfigError> {
    let text = text.trim();
    if text.is_empty() { return Err(ConfigError::MissingRounds); }
    let n: i64 = text.parse().map_err(|_| ConfigError::RoundsNotANumber(text.to_string()))?;
    match u32::try_from(n) {
        Ok(rounds) if (MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) => Ok(rounds),
        _ => Err(ConfigError::RoundsOutOfRange(n)),
    }
}

pub fn placeholder_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Player {i}")).collect()
}

pub fn validate_names(names: &[String], expected: usize) -> Result<(), ConfigError> {
    if names.len() != expected {
        return Err(ConfigError::NameCount { expected, got: names.len() });
    }
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if name.trim().is_empty() { return Err(ConfigError::EmptyName); }
        if !seen.insert(name.as_str()) { return Err(ConfigError::DuplicateName(name.clone())); }
    }
    Ok(())
}

/// Each seat picks a name from [`NAME_POOL`]; a name taken by one seat is
/// unavailable to the others.
#[derive(Clone, Debug)]
pub struct RosterDraft {
    slots: Vec<Option<String>>,
}

impl RosterDraft {
    pub fn new(config: &MatchConfig) -> Self {
        RosterDraft { slots: vec![None; config.player_count()] }
    }

    pub fn choose(&mut self, slot: usize, name: &str) -> Result<(), ConfigError> {
        if slot >= self.slots.len() { return Err(ConfigError::NoSuchSlot(slot)); }
        if !NAME_POOL.contains(&name) { return Err(ConfigError::UnknownName(name.to_string())); }
        let taken_elsewhere = self.slots.iter().enumerate()
            .any(|(i, s)| i != slot && s.as_deref() == Some(name));
        if taken_elsewhere { return Err(ConfigError::DuplicateName(name.to_string())); }
        self.slots[slot] = Some(name.to_string());
        Ok(())
    }

    pub fn available(&self) -> Vec<&'static str> {
        NAME_POOL.iter().copied()
            .filter(|n| !self.slots.iter().any(|s| s.as_deref() == Some(*n)))
            .collect()
    }

    pub fn slot(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    pub fn is_complete(&self) -> bool { self.slots.iter().all(Option::is_some) }

    /// Names in seat order, once every seat has one.
    pub fn finish(self) -> Result<Vec<String>, ConfigError> {
        self.slots.into_iter().enumerate()
            .map(|(i, s)| s.ok_or(ConfigError::UnfilledSlot(i)))
            .collect()
    }
}
