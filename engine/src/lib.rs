//! Lagrand Core - Deterministic Random Engine
//!
//! Reproducible pseudo-random integers, bytes, floats, booleans, shuffles
//! and weighted choices from a single seed, safe to share across threads.
//!
//! # Architecture
//!
//! - **seed**: Seed parsing, hashing and synthesis
//! - **rng**: Lagged subtractive generator (the only state mutation)
//! - **engine**: Lock-guarded engine, reseed and reset
//! - **range**: Bounded integers, bytes, floats, doubles and booleans
//! - **weight**: Weight capabilities and the `weighted_enum!` macro
//! - **select**: Shuffling and weighted choice
//! - **snapshot**: Save/restore of the full generator state
//!
//! # Critical Invariants
//!
//! 1. Same seed + same calls → same values
//! 2. Generator state is only touched under the engine's lock
//! 3. Invalid arguments are rejected before any sample is drawn
//!
//! Not suitable for cryptographic use.

// Module declarations
pub mod config;
pub mod draws;
pub mod engine;
pub mod error;
mod range;
pub mod rng;
pub mod seed;
mod select;
pub mod shared;
pub mod snapshot;
pub mod weight;

// Re-exports for convenience
pub use config::EngineConfig;
pub use draws::Draws;
pub use engine::RandomEngine;
pub use error::{RandomError, Result};
pub use seed::Seed;
pub use shared::shared;
pub use snapshot::EngineSnapshot;
pub use weight::{weight_of, Weighted, WeightedEnum, WeightedValue, DEFAULT_WEIGHT};
