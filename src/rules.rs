use crate::model::{Outcome, Player};

pub const DIE_SIDES: u8 = 6;
pub const BUST_FACE: u8 = 1;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 10;

#[inline] pub fn is_bust(face: u8) -> bool { face == BUST_FACE }

#[inline] pub fn is_valid_face(face: u8) -> bool { (1..=DIE_SIDES).contains(&face) }

/// Highest total wins outright; a shared maximum is a tie, never an arbitrary pick.
/// Returns `None` only for an empty roster.
pub fn decide_outcome(players: &[Player]) -> Option<Outcome> {
    let mut tops: Vec<usize> = vec![];
    let mut high = 0u32;
    for (i, p) in players.iter().enumerate() {
        if tops.is_empty() || p.total_score > high { high = p.total_score; tops.clear(); tops.push(i); }
        else if p.total_score == high { tops.push(i); }
    }
    match tops.len() {
        0 => None,
        1 => Some(Outcome::Winner(players[tops[0]].id)),
        _ => Some(Outcome::Tie(tops.iter().map(|&i| players[i].id).collect())),
    }
}
