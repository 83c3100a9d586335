//! Randomness used by a match: one die and the opening seat shuffle.
//!
//! Production code uses [`Die`]; tests script the faces with [`ScriptedDie`].

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::rules::{is_valid_face, DIE_SIDES};

pub trait DieSource {
    /// Uniform face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Called once when a match is created to randomize seating order.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

#[derive(Clone, Debug)]
pub struct Die {
    rng: StdRng,
}

impl Die {
    pub fn seeded(seed: u64) -> Self { Die { rng: StdRng::seed_from_u64(seed ^ 0x5EED) } }

    pub fn from_entropy() -> Self { Die { rng: StdRng::from_entropy() } }
}

impl Default for Die {
    fn default() -> Self { Die::from_entropy() }
}

impl DieSource for Die {
    fn roll_die(&mut self) -> u8 { self.rng.gen_range(1..=DIE_SIDES) }

    fn shuffle<T>(&mut self, items: &mut [T]) { items.shuffle(&mut self.rng); }
}

/// Replays a fixed face sequence, wrapping around when it runs out.
/// Seating order is left as given.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    faces: Vec<u8>,
    pos: usize,
}

impl ScriptedDie {
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        let faces = faces.into();
        assert!(!faces.is_empty(), "scripted die needs at least one face");
        for (k, &f) in faces.iter().enumerate() {
            assert!(is_valid_face(f), "face {} at {} is not a die face", f, k);
        }
        ScriptedDie { faces, pos: 0 }
    }

    /// Faces handed out so far.
    pub fn rolled(&self) -> usize { self.pos }
}

impl DieSource for ScriptedDie {
    fn roll_die(&mut self) -> u8 {
        let face = self.faces[self.pos % self.faces.len()];
        self.pos += 1;
        face
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
