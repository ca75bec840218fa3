//! Deterministic random number generation
//!
//! Uses a lagged subtractive generator over a 55-slot state table.
//! CRITICAL: Every value the engine produces is derived from
//! [`SubtractiveTable::sample`]; nothing else mutates generator state.

mod subtractive;

pub use subtractive::{SubtractiveTable, INT32_MAX, PRIME_OFFSET, SEED_CONSTANT, TABLE_LEN};
