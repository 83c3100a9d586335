//! The turn/round state machine.
//!
//! A match is `InProgress` until the roster wraps past the last round, at
//! which point it becomes `Finished` in the same call and never changes again.

use log::{debug, info, warn};
use serde_json::json;

use crate::config::{validate_names, MatchConfig};
use crate::error::{ConfigError, MatchError};
use crate::model::*;
use crate::rng::DieSource;
use crate::rules::{decide_outcome, is_bust};

#[derive(Debug)]
pub struct MatchState<D> {
    players: Vec<Player>,
    current_idx: usize,
    current_round: u32,
    total_rounds: u32,
    status: Status,
    events: Vec<Event>,
    events_seq: u64,
    die: D,
}

impl<D: DieSource> MatchState<D> {
    /// Ids follow the order of `names`; seating is then shuffled once by `die`.
    pub fn new(config: MatchConfig, names: Vec<String>, mut die: D) -> Result<Self, ConfigError> {
        validate_names(&names, config.player_count())?;
        let mut players: Vec<Player> = names.into_iter().enumerate()
            .map(|(i, name)| Player::new(i as PlayerId, name))
            .collect();
        die.shuffle(&mut players);
        info!(
            "match started: {} players, {} rounds, order [{}]",
            players.len(), config.rounds(),
            players.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        Ok(MatchState {
            players, current_idx: 0, current_round: 1, total_rounds: config.rounds(),
            status: Status::InProgress, events: vec![], events_seq: 0, die,
        })
    }

    pub fn roll(&mut self) -> Result<DieOutcome, MatchError> {
        self.ensure_in_progress("roll")?;
        let face = self.die.roll_die();
        let idx = self.current_idx;
        let (id, name) = (self.players[idx].id, self.players[idx].name.clone());
        let bust = is_bust(face);
        if bust {
            let lost = std::mem::take(&mut self.players[idx].turn_score);
            let follow = self.advance_turn();
            self.record(EventType::Bust, json!({ "player": id, "name": name, "lost": lost }));
            self.record_all(follow);
        } else {
            let p = &mut self.players[idx];
            p.turn_score += face as u32;
            let turn = p.turn_score;
            self.record(
                EventType::Roll,
                json!({ "player": id, "name": name, "face": face, "turnScore": turn }),
            );
        }
        Ok(DieOutcome { face, bust })
    }

    /// Commits the pending turn score. Returns the points banked.
    pub fn bank(&mut self) -> Result<u32, MatchError> {
        self.ensure_in_progress("bank")?;
        let idx = self.current_idx;
        let banked = self.players[idx].turn_score;
        if banked == 0 {
            warn!("bank rejected: {} has no points this turn", self.players[idx].name);
            return Err(MatchError::NoPointsToBank);
        }
        let p = &mut self.players[idx];
        p.total_score += banked;
        p.turn_score = 0;
        let (id, name, total) = (p.id, p.name.clone(), p.total_score);
        let follow = self.advance_turn();
        self.record(
            EventType::Bank,
            json!({ "player": id, "name": name, "banked": banked, "total": total }),
        );
        self.record_all(follow);
        Ok(banked)
    }

    /// Moves to the next seat. Returns the round or match event the move
    /// triggered, to be logged after the acting player's own event.
    fn advance_turn(&mut self) -> Option<(EventType, serde_json::Value)> {
        self.current_idx = (self.current_idx + 1) % self.players.len();
        if self.current_idx != 0 { return None; }
        if self.current_round >= self.total_rounds {
            let outcome = decide_outcome(&self.players)?;
            info!("match finished after {} rounds: {:?}", self.total_rounds, outcome);
            self.status = Status::Finished(outcome.clone());
            let payload = json!({ "outcome": outcome, "totals": self.totals() });
            Some((EventType::MatchEnd, payload))
        } else {
            self.current_round += 1;
            let payload = json!({ "round": self.current_round, "of": self.total_rounds });
            Some((EventType::RoundStart, payload))
        }
    }

    fn ensure_in_progress(&self, op: &str) -> Result<(), MatchError> {
        if self.is_finished() {
            warn!("{op} rejected: match already finished");
            return Err(MatchError::InvalidState);
        }
        Ok(())
    }

    fn record(&mut self, ty: EventType, payload: serde_json::Value) {
        self.events_seq += 1;
        let ev = Event { seq: self.events_seq, ty, payload, digest: self.digest() };
        debug!("event {} {:?} {} [{}]", ev.seq, ev.ty, ev.payload, ev.digest);
        self.events.push(ev);
    }

    fn record_all(&mut self, follow: Option<(EventType, serde_json::Value)>) {
        if let Some((ty, payload)) = follow { self.record(ty, payload); }
    }

    fn digest(&self) -> String {
        let turn = self.players[self.current_idx].turn_score;
        format!("r{}/{}:p{}:t{}", self.current_round, self.total_rounds, self.current_idx, turn)
    }

    fn totals(&self) -> Vec<(PlayerId, u32)> {
        self.players.iter().map(|p| (p.id, p.total_score)).collect()
    }
}

impl<D> MatchState<D> {
    pub fn is_finished(&self) -> bool { matches!(self.status, Status::Finished(_)) }

    pub fn status(&self) -> &Status { &self.status }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.status { Status::Finished(o) => Some(o), Status::InProgress => None }
    }

    /// The single winner, if the match finished without a tie.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome()? {
            Outcome::Winner(id) => self.player(*id),
            Outcome::Tie(_) => None,
        }
    }

    pub fn players(&self) -> &[Player] { &self.players }

    pub fn player(&self, id: PlayerId) -> Option<&Player> { self.players.iter().find(|p| p.id == id) }

    pub fn current_player(&self) -> &Player { &self.players[self.current_idx] }

    pub fn current_player_index(&self) -> usize { self.current_idx }

    pub fn current_round(&self) -> u32 { self.current_round }

    pub fn total_rounds(&self) -> u32 { self.total_rounds }

    pub fn events(&self) -> &[Event] { &self.events }

    pub fn die(&self) -> &D { &self.die }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::placeholder_names;
    use crate::rng::ScriptedDie;

    fn new_match(players: usize, rounds: u32, faces: &[u8]) -> MatchState<ScriptedDie> {
        let cfg = MatchConfig::new(players, rounds).unwrap();
        MatchState::new(cfg, placeholder_names(players), ScriptedDie::new(faces.to_vec())).unwrap()
    }

    #[test]
    fn starts_at_first_seat_round_one() {
        let m = new_match(3, 2, &[2]);
        assert_eq!(m.current_player_index(), 0);
        assert_eq!(m.current_round(), 1);
        assert_eq!(m.total_rounds(), 2);
        assert_eq!(m.status(), &Status::InProgress);
        assert!(m.players().iter().all(|p| p.turn_score == 0 && p.total_score == 0));
        assert!(m.events().is_empty());
    }

    #[test]
    fn rejects_bad_roster() {
        let cfg = MatchConfig::new(2, 1).unwrap();
        let names = vec!["Ana".to_string(), "Ana".to_string()];
        assert_eq!(
            MatchState::new(cfg, names, ScriptedDie::new([2])).err(),
            Some(ConfigError::DuplicateName("Ana".into()))
        );
        assert_eq!(
            MatchState::new(cfg, placeholder_names(3), ScriptedDie::new([2])).err(),
            Some(ConfigError::NameCount { expected: 2, got: 3 })
        );
    }

    #[test]
    fn non_bust_keeps_the_turn() {
        let mut m = new_match(2, 1, &[4, 5]);
        assert_eq!(m.roll(), Ok(DieOutcome { face: 4, bust: false }));
        assert_eq!(m.roll(), Ok(DieOutcome { face: 5, bust: false }));
        assert_eq!(m.current_player_index(), 0);
        assert_eq!(m.current_player().turn_score, 9);
    }

    #[test]
    fn bust_advances_exactly_once() {
        let mut m = new_match(3, 2, &[6, 1]);
        m.roll().unwrap();
        assert_eq!(m.roll(), Ok(DieOutcome { face: 1, bust: true }));
        assert_eq!(m.current_player_index(), 1);
        assert_eq!(m.players()[0].turn_score, 0);
        assert_eq!(m.players()[0].total_score, 0);
    }

    #[test]
    fn bank_moves_points_and_passes_turn() {
        let mut m = new_match(2, 3, &[5, 3]);
        m.roll().unwrap();
        m.roll().unwrap();
        assert_eq!(m.bank(), Ok(8));
        assert_eq!(m.players()[0].total_score, 8);
        assert_eq!(m.players()[0].turn_score, 0);
        assert_eq!(m.current_player_index(), 1);
    }

    #[test]
    fn bank_with_nothing_is_rejected_without_change() {
        let mut m = new_match(2, 1, &[3]);
        assert_eq!(m.bank(), Err(MatchError::NoPointsToBank));
        assert_eq!(m.current_player_index(), 0);
        assert!(m.events().is_empty());
    }

    #[test]
    fn wrap_starts_next_round() {
        let mut m = new_match(2, 2, &[1]);
        m.roll().unwrap();
        assert_eq!(m.current_round(), 1);
        m.roll().unwrap();
        assert_eq!(m.current_round(), 2);
        assert_eq!(m.current_player_index(), 0);
        assert_eq!(m.events().last().map(|e| e.ty), Some(EventType::RoundStart));
    }

    #[test]
    fn finishes_on_final_wrap_and_freezes() {
        let mut m = new_match(2, 1, &[1]);
        m.roll().unwrap();
        assert!(!m.is_finished());
        m.roll().unwrap();
        assert!(m.is_finished());
        assert_eq!(m.current_round(), 1);
        assert_eq!(m.outcome(), Some(&Outcome::Tie(vec![0, 1])));
        assert!(m.winner().is_none());
        let seen = m.events().len();
        assert_eq!(m.roll(), Err(MatchError::InvalidState));
        assert_eq!(m.bank(), Err(MatchError::InvalidState));
        assert_eq!(m.events().len(), seen);
        assert_eq!(m.die().rolled(), 2);
    }

    #[test]
    fn bust_event_digest_shows_next_seat() {
        let mut m = new_match(3, 2, &[1]);
        m.roll().unwrap();
        assert_eq!(m.current_player_index(), 1);
        let last = m.events().last().unwrap();
        assert_eq!(last.ty, EventType::Bust);
        assert_eq!(last.digest, "r1/2:p1:t0");
    }

    #[test]
    fn bank_event_precedes_round_start() {
        let mut m = new_match(2, 2, &[1, 4]);
        m.roll().unwrap();
        m.roll().unwrap();
        m.bank().unwrap();
        let tail: Vec<(EventType, &str)> =
            m.events()[2..].iter().map(|e| (e.ty, e.digest.as_str())).collect();
        assert_eq!(tail, vec![(EventType::Bank, "r2/2:p0:t0"), (EventType::RoundStart, "r2/2:p0:t0")]);
        assert_eq!(m.events()[2].payload["name"], "Player 2");
    }

    #[test]
    fn event_seq_is_dense() {
        let mut m = new_match(2, 2, &[2, 3, 1]);
        for _ in 0..3 { m.roll().unwrap(); }
        m.bank().ok();
        let seqs: Vec<u64> = m.events().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, (1..=seqs.len() as u64).collect::<Vec<_>>());
        assert_eq!(m.events()[0].payload["face"], 2);
        assert_eq!(m.events()[2].ty, EventType::Bust);
        assert_eq!(m.events()[2].payload["lost"], 5);
    }
}
