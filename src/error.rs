use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("no match is being played")]
    InvalidState,
    #[error("nothing to bank: roll the die first")]
    NoPointsToBank,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count {0} must be between 2 and 4")]
    PlayerCount(usize),
    #[error("round count {0} must be between 1 and 10")]
    RoundsOutOfRange(i64),
    #[error("enter the number of rounds")]
    MissingRounds,
    #[error("'{0}' is not a valid number of rounds")]
    RoundsNotANumber(String),
    #[error("expected {expected} names, got {got}")]
    NameCount { expected: usize, got: usize },
    #[error("player names must not be empty")]
    EmptyName,
    #[error("name '{0}' is already taken")]
    DuplicateName(String),
    #[error("'{0}' is not in the name pool")]
    UnknownName(String),
    #[error("seat {0} does not exist")]
    NoSuchSlot(usize),
    #[error("seat {0} has no name yet")]
    UnfilledSlot(usize),
    #[error("invalid config: {0}")]
    Parse(String),
}
