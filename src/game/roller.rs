use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DIE_FACES: u32 = 6;

/// Source of randomness for the game: die rolls and seating order.
pub trait Roller {
    /// A uniformly distributed value in `1..=DIE_FACES`.
    fn roll_die(&mut self) -> u32;

    /// A uniformly distributed index in `0..=upper`.
    fn random_index(&mut self, upper: usize) -> usize;

    /// Fisher-Yates, walking from the last index down to 1.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random_index(i);
            items.swap(i, j);
        }
    }
}

#[derive(Debug)]
pub struct StdRngRoller {
    rng: StdRng,
}

impl StdRngRoller {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for StdRngRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl Roller for StdRngRoller {
    fn roll_die(&mut self) -> u32 {
        self.rng.random_range(1..=DIE_FACES)
    }

    fn random_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Replays a fixed sequence of die values. Shuffles always pick index 0.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedRoller {
    rolls: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedRoller {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self { rolls: rolls.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

#[cfg(test)]
impl Roller for ScriptedRoller {
    fn roll_die(&mut self) -> u32 {
        self.rolls.pop_front().expect("scripted roller ran out of rolls")
    }

    fn random_index(&mut self, _upper: usize) -> usize {
        0
    }
}
