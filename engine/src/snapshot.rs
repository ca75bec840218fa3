//! Snapshot - Save/Restore Engine State
//!
//! Captures the seed text, the full generator table and both cursors so an
//! engine can resume mid-sequence, in this process or another one.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored engine continues with exactly the values
//!   the captured engine would have produced
//! - **Atomicity**: a snapshot is validated in full before any state is
//!   replaced; an invalid snapshot leaves the engine untouched

use crate::engine::{EngineState, RandomEngine};
use crate::error::{RandomError, Result};
use crate::rng::{SubtractiveTable, INT32_MAX, PRIME_OFFSET, TABLE_LEN};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Seed text at the time of the snapshot
    pub seed: String,

    /// Generator table, `TABLE_LEN` entries in `[0, INT32_MAX]`
    pub table: Vec<i32>,

    /// Slot the next sample is written to
    pub next_index: usize,

    /// Slot subtracted on the next sample
    pub next_prime_index: usize,
}

impl EngineSnapshot {
    /// Check the structural invariants of the generator table
    pub fn validate(&self) -> Result<()> {
        if self.table.len() != TABLE_LEN {
            return Err(RandomError::InvalidSnapshot(format!(
                "table has {} entries, expected {}",
                self.table.len(),
                TABLE_LEN
            )));
        }

        if let Some((slot, value)) = self
            .table
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(0..=INT32_MAX).contains(&v))
        {
            return Err(RandomError::InvalidSnapshot(format!(
                "table slot {} holds {}, outside [0, {}]",
                slot, value, INT32_MAX
            )));
        }

        for (name, index) in [
            ("next_index", self.next_index),
            ("next_prime_index", self.next_prime_index),
        ] {
            if index >= TABLE_LEN {
                return Err(RandomError::InvalidSnapshot(format!(
                    "{} {} out of range [0, {})",
                    name, index, TABLE_LEN
                )));
            }
        }

        if (self.next_index + PRIME_OFFSET) % TABLE_LEN != self.next_prime_index {
            return Err(RandomError::InvalidSnapshot(format!(
                "cursors {} and {} are not {} slots apart",
                self.next_index, self.next_prime_index, PRIME_OFFSET
            )));
        }

        Ok(())
    }

    /// SHA256 hex digest of the snapshot's canonical JSON form
    ///
    /// Two snapshots with equal fingerprints resume identical sequences.
    pub fn fingerprint(&self) -> Result<String> {
        let json = self.to_json()?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        Ok(format!("{:x}", result))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            RandomError::InvalidSnapshot(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: EngineSnapshot = serde_json::from_str(json).map_err(|e| {
            RandomError::InvalidSnapshot(format!("Snapshot deserialization failed: {}", e))
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn to_state(&self) -> Result<EngineState> {
        self.validate()?;

        let mut table = [0i32; TABLE_LEN];
        table.copy_from_slice(&self.table);

        Ok(EngineState {
            seed_text: self.seed.clone(),
            table: SubtractiveTable::from_parts(table, self.next_index, self.next_prime_index),
        })
    }
}

impl EngineSnapshot {
    fn capture(state: &EngineState) -> Self {
        EngineSnapshot {
            seed: state.seed_text.clone(),
            table: state.table.table().to_vec(),
            next_index: state.table.next_index(),
            next_prime_index: state.table.next_prime_index(),
        }
    }
}

// ============================================================================
// Engine Integration
// ============================================================================

impl RandomEngine {
    /// Capture the complete engine state
    ///
    /// # Example
    /// ```
    /// use lagrand_core::RandomEngine;
    ///
    /// let engine = RandomEngine::with_seed(12345);
    /// engine.next_sample();
    /// let snapshot = engine.snapshot();
    ///
    /// let resumed = RandomEngine::from_snapshot(&snapshot).unwrap();
    /// assert_eq!(engine.next_sample(), resumed.next_sample());
    /// ```
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(&self.state())
    }

    /// Replace all engine state with a snapshot
    ///
    /// # Errors
    /// [`RandomError::InvalidSnapshot`] if the snapshot fails validation;
    /// the engine is left unchanged.
    pub fn restore(&self, snapshot: &EngineSnapshot) -> Result<()> {
        let state = snapshot.to_state()?;
        self.replace_state(state);
        tracing::debug!(
            seed = %snapshot.seed,
            next_index = snapshot.next_index,
            "engine restored from snapshot"
        );
        Ok(())
    }

    /// Build a new engine from a snapshot
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Result<Self> {
        Ok(RandomEngine::from_state(snapshot.to_state()?))
    }
}
