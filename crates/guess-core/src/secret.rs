use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::MIN_NUMBER;

/// Supplies the secret number for a new round.
pub trait SecretSource {
    /// Draw a value in `[1, max_number]`.
    fn draw(&mut self, max_number: i32) -> i32;
}

/// Uniformly random secrets backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RandomSecret<R = StdRng> {
    rng: R,
}

impl RandomSecret<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence of secrets for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomSecret<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomSecret<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self, max_number: i32) -> i32 {
        self.rng.gen_range(MIN_NUMBER..=max_number.max(MIN_NUMBER))
    }
}

/// Replays a fixed list of secrets, wrapping around at the end.
///
/// Values are clamped into the round's range so a fixture can never
/// produce an unguessable secret.
#[derive(Debug, Clone)]
pub struct SequenceSecret {
    values: Vec<i32>,
    next: usize,
}

impl SequenceSecret {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl SecretSource for SequenceSecret {
    fn draw(&mut self, max_number: i32) -> i32 {
        let Some(&value) = self.values.get(self.next) else {
            return MIN_NUMBER;
        };
        self.next = (self.next + 1) % self.values.len();
        value.clamp(MIN_NUMBER, max_number.max(MIN_NUMBER))
    }
}
