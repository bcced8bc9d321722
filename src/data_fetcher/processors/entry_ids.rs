use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const LETTERS: usize = 4;
const DIGITS: usize = 6;

/// Issues feed entry identifiers: four lowercase letters then six digits.
///
/// Identifiers are random but never repeat within one generator, which lives
/// for exactly one run.
#[derive(Debug)]
pub struct EntryIdGenerator {
    rng: SmallRng,
    issued: HashSet<String>,
}

impl EntryIdGenerator {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Deterministic generator for tests
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        EntryIdGenerator {
            rng,
            issued: HashSet::new(),
        }
    }

    /// Next identifier not yet issued by this generator
    pub fn next_id(&mut self) -> String {
        loop {
            let candidate = self.draw();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn draw(&mut self) -> String {
        let mut id = String::with_capacity(LETTERS + DIGITS);
        for _ in 0..LETTERS {
            id.push(char::from(self.rng.random_range(b'a'..=b'z')));
        }
        for _ in 0..DIGITS {
            id.push(char::from(b'0' + self.rng.random_range(0..10u8)));
        }
        id
    }
}

impl Default for EntryIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
