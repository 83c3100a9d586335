//! What the presentation layer renders after each call.

use serde::Serialize;

use crate::error::MatchError;
use crate::model::{Event, EventType, Outcome, PlayerId};
use crate::state::MatchState;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ScoreLine {
    pub id: PlayerId,
    pub name: String,
    pub total: u32,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub current_player: String,
    pub current_player_id: PlayerId,
    pub turn_score: u32,
    pub round: u32,
    pub total_rounds: u32,
    pub scoreboard: Vec<ScoreLine>,
    pub finished: bool,
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    pub fn of<D>(m: &MatchState<D>) -> Self {
        let cur = m.current_player();
        Snapshot {
            current_player: cur.name.clone(),
            current_player_id: cur.id,
            turn_score: cur.turn_score,
            round: m.current_round(),
            total_rounds: m.total_rounds(),
            scoreboard: scoreboard(m),
            finished: m.is_finished(),
            outcome: m.outcome().cloned(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Rows in seating order; nobody is active once the match is over.
pub fn scoreboard<D>(m: &MatchState<D>) -> Vec<ScoreLine> {
    let live = !m.is_finished();
    m.players().iter().enumerate().map(|(i, p)| ScoreLine {
        id: p.id,
        name: p.name.clone(),
        total: p.total_score,
        active: live && i == m.current_player_index(),
    }).collect()
}

pub fn scoreboard_text(lines: &[ScoreLine]) -> String {
    let mut out = String::new();
    for l in lines {
        let mark = if l.active { "- " } else { " " };
        out.push_str(&format!("{mark}{}: {} points\n", l.name, l.total));
    }
    out
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FinalReport {
    pub winner: Option<String>,
    pub tied: Vec<String>,
    pub board: String,
}

impl FinalReport {
    /// `None` while the match is still running.
    pub fn of<D>(m: &MatchState<D>) -> Option<Self> {
        let outcome = m.outcome()?;
        let name_of = |id: &PlayerId| m.player(*id).map(|p| p.name.clone()).unwrap_or_default();
        let (winner, tied) = match outcome {
            Outcome::Winner(id) => (Some(name_of(id)), vec![]),
            Outcome::Tie(ids) => (None, ids.iter().map(name_of).collect()),
        };
        Some(FinalReport { winner, tied, board: scoreboard_text(&scoreboard(m)) })
    }

    pub fn headline(&self) -> String {
        match &self.winner {
            Some(name) => format!("The winner is {name}!"),
            None => format!("It's a tie between {}!", self.tied.join(", ")),
        }
    }
}

/// One-line status message for a logged event.
pub fn describe(ev: &Event) -> String {
    let p = &ev.payload;
    let name = p["name"].as_str().unwrap_or("?");
    match ev.ty {
        EventType::Roll => format!("{name} rolled a {}! {} points this turn.", p["face"], p["turnScore"]),
        EventType::Bust => format!("{name} rolled a 1 and loses this turn's points."),
        EventType::Bank => format!("{name} banked {} points, {} in total.", p["banked"], p["total"]),
        EventType::RoundStart => format!("Round {} of {} begins.", p["round"], p["of"]),
        EventType::MatchEnd => "The match is over.".to_string(),
    }
}

pub fn rejection(err: &MatchError) -> &'static str {
    match err {
        MatchError::NoPointsToBank => "Roll the die first.",
        MatchError::InvalidState => "There is no match to play. Start a new one.",
    }
}
