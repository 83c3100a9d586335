use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub turn_score: u32, // pending, not yet banked
    pub total_score: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player { id, name: name.into(), turn_score: 0, total_score: 0 }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for Player {}

/// How a finished match was decided.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    /// Two or more players share the top total. Ids are in seating order.
    Tie(Vec<PlayerId>),
}

impl Outcome {
    pub fn is_winner(&self, id: PlayerId) -> bool {
        matches!(self, Outcome::Winner(w) if *w == id)
    }

    pub fn contenders(&self) -> Vec<PlayerId> {
        match self {
            Outcome::Winner(w) => vec![*w],
            Outcome::Tie(ids) => ids.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Finished(Outcome),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventType {
    Roll,
    Bust,
    Bank,
    RoundStart,
    MatchEnd,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub seq: u64,
    pub ty: EventType,
    pub payload: serde_json::Value,
    pub digest: String,
}

/// What a single `roll` produced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DieOutcome {
    pub face: u8,
    pub bust: bool,
}
