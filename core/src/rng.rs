//! Park–Miller "minimal standard" generator.
//!
//! Every daily puzzle is derived from this stream, so two players with the
//! same seed must observe bit-identical values. The arithmetic is done on
//! integers and only the final division produces a float.

use serde::{Deserialize, Serialize};

/// Modulus of the generator, the Mersenne prime `2^31 - 1`.
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier of the generator, `7^5`.
pub const MULTIPLIER: u64 = 16_807;

/// State used in place of seeds that reduce to zero, which would otherwise
/// stick at zero forever.
pub const DEFAULT_SEED: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Any integer is accepted. Negative seeds and seeds past the modulus
    /// are reduced into range first.
    pub fn new(seed: i64) -> Self {
        let reduced = seed.rem_euclid(MODULUS as i64) as u32;
        let state = if reduced == 0 {
            log::debug!("seed {seed} reduces to zero, using {DEFAULT_SEED}");
            DEFAULT_SEED
        } else {
            reduced
        };
        Self { state }
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the generator and returns the new raw state in `1..MODULUS`.
    pub fn next_state(&mut self) -> u32 {
        let (state, _) = step(self.state);
        self.state = state;
        state
    }

    /// Advances the generator and returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let (state, value) = step(self.state);
        self.state = state;
        value
    }

    /// Uniform index in `0..n`, computed as `floor(next_f64() * n)`.
    pub fn next_index(&mut self, n: usize) -> usize {
        let index = (self.next_f64() * n as f64) as usize;
        index.min(n.saturating_sub(1))
    }

    /// Fisher–Yates from the back, one float draw per swap.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Fisher–Yates from the back choosing `j = state % (i + 1)`.
    ///
    /// Produces a different order than [`SeededRng::shuffle`] for the same
    /// seed; the word chain bank was always shuffled this way.
    pub fn shuffle_by_state<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_state() as usize % (i + 1);
            items.swap(i, j);
        }
    }
}

/// Pure transition `state -> (state', state' / MODULUS)`.
pub fn step(state: u32) -> (u32, f64) {
    let next = (u64::from(state) * MULTIPLIER) % MODULUS;
    (next as u32, next as f64 / MODULUS as f64)
}
