//! Opt-in process-wide engine
//!
//! Nothing in this crate draws from the shared engine; callers that want
//! a convenient default reach for it explicitly. Its sequence is seeded
//! unpredictably on first use and is shared by every thread, so it is not
//! reproducible across runs. Build a [`RandomEngine`] instead wherever
//! determinism matters.

use crate::engine::RandomEngine;
use std::sync::OnceLock;

static SHARED: OnceLock<RandomEngine> = OnceLock::new();

/// Lazily created engine shared by the whole process
///
/// # Example
/// ```
/// let coin = lagrand_core::shared().next_bool();
/// # let _ = coin;
/// ```
pub fn shared() -> &'static RandomEngine {
    SHARED.get_or_init(RandomEngine::new)
}
