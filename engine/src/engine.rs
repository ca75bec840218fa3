//! Thread-safe engine
//!
//! [`RandomEngine`] owns the seed text and the generator table behind one
//! mutex. Every public operation is composed of calls to
//! [`RandomEngine::next_sample`], each of which takes the lock once.
//! Composite operations (ranges, shuffles, choices) are therefore atomic
//! per sample, not as a whole.
//!
//! # Construction cost
//!
//! Building an engine fills and warms up a 55-slot table (roughly 270
//! subtractions). Seedless construction additionally draws a UUID v4
//! from the operating system. Engines are cheap enough to create per
//! task, and can be shared by reference across threads.

use crate::rng::SubtractiveTable;
use crate::seed::Seed;
use std::sync::{Mutex, MutexGuard};

/// Everything the lock guards
#[derive(Debug, Clone)]
pub(crate) struct EngineState {
    pub(crate) seed_text: String,
    pub(crate) table: SubtractiveTable,
}

impl EngineState {
    fn from_seed(seed: &Seed) -> Self {
        Self {
            seed_text: seed.text(),
            table: SubtractiveTable::seeded(seed.numeric()),
        }
    }
}

/// Deterministic, thread-safe pseudo-random number engine
///
/// Not suitable for cryptographic use.
///
/// # Example
/// ```
/// use lagrand_core::RandomEngine;
///
/// let engine = RandomEngine::with_seed(12345);
/// let roll = engine.next_int_in(1, 7).unwrap(); // [1, 7)
/// assert!((1..7).contains(&roll));
///
/// let replay = RandomEngine::with_seed("12345");
/// assert_eq!(replay.next_int_in(1, 7).unwrap(), roll);
/// ```
#[derive(Debug)]
pub struct RandomEngine {
    state: Mutex<EngineState>,
}

impl RandomEngine {
    /// Create an engine with a synthesized, unpredictable seed
    pub fn new() -> Self {
        Self::with_seed(Seed::random())
    }

    /// Create an engine from a numeric or textual seed
    pub fn with_seed(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        let state = EngineState::from_seed(&seed);
        tracing::debug!(seed = %state.seed_text, "engine created");
        Self {
            state: Mutex::new(state),
        }
    }

    pub(crate) fn from_state(state: EngineState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Current seed text
    pub fn seed(&self) -> String {
        self.lock().seed_text.clone()
    }

    /// Replace the seed and reinitialize the generator
    ///
    /// Equivalent to [`reseed`](Self::reseed); this is the path any
    /// host-side seed editing goes through.
    pub fn set_seed(&self, seed: impl Into<Seed>) {
        self.reseed(seed);
    }

    /// Reinitialize the generator from a new seed
    ///
    /// The new table is built before the lock is taken and swapped in
    /// whole, so no caller ever observes a half-initialized state.
    pub fn reseed(&self, seed: impl Into<Seed>) {
        let fresh = EngineState::from_seed(&seed.into());
        let mut state = self.lock();
        *state = fresh;
        tracing::debug!(seed = %state.seed_text, "engine reseeded");
    }

    /// Reinitialize the generator from a synthesized seed
    pub fn reseed_random(&self) {
        self.reseed(Seed::random());
    }

    /// Restart the sequence from the current seed text
    ///
    /// Draws after a reset repeat the draws made after construction (or
    /// after the most recent reseed) exactly.
    pub fn reset(&self) {
        let mut state = self.lock();
        let seed = Seed::Text(state.seed_text.clone());
        *state = EngineState::from_seed(&seed);
        tracing::debug!(seed = %state.seed_text, "engine reset");
    }

    /// Draw one raw sample in `[0, INT32_MAX)`
    pub fn next_sample(&self) -> i32 {
        self.lock().table.sample()
    }

    /// Uniform value derived from one sample
    ///
    /// Inclusive: `[0, 1]`, used for floating-point generation.
    /// Exclusive: `[0, 1)`, used for integer scaling.
    pub(crate) fn next_unit(&self, inclusive: bool) -> f64 {
        let sample = f64::from(self.next_sample());
        if inclusive {
            sample * (1.0 / f64::from(crate::rng::INT32_MAX - 1))
        } else {
            sample * (1.0 / f64::from(crate::rng::INT32_MAX))
        }
    }

    /// Copy of the guarded state
    pub(crate) fn state(&self) -> EngineState {
        self.lock().clone()
    }

    /// Swap in a complete state
    pub(crate) fn replace_state(&self, fresh: EngineState) {
        *self.lock() = fresh;
    }

    fn lock(&self) -> MutexGuard<'_, EngineState> {
        // Sampling cannot panic while the lock is held, so poisoning only
        // follows a panic in unrelated caller code; the state is still whole.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RandomEngine {
    /// Independent engine continuing from the same point in the sequence
    fn clone(&self) -> Self {
        Self::from_state(self.state())
    }
}
