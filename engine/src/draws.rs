//! Lazy sequences of draws

use crate::engine::RandomEngine;
use std::fmt;
use std::iter::FusedIterator;

type DrawFn<'a, T> = Box<dyn FnMut(&RandomEngine) -> T + 'a>;

/// Finite, lazily evaluated sequence of values drawn from an engine
///
/// Each call to `next` draws exactly the samples needed for one value, at
/// that moment. Dropping the iterator early leaves the engine in a
/// consistent state; values never pulled are never drawn. A `Draws` cannot
/// be restarted: once exhausted it keeps returning `None`.
///
/// # Example
/// ```
/// use lagrand_core::RandomEngine;
///
/// let engine = RandomEngine::with_seed(7);
/// let dice: Vec<i32> = engine.ints_in(3, 1, 7).unwrap().collect();
/// assert_eq!(dice.len(), 3);
/// ```
pub struct Draws<'a, T> {
    engine: &'a RandomEngine,
    remaining: usize,
    draw: DrawFn<'a, T>,
}

impl<'a, T> Draws<'a, T> {
    pub(crate) fn new(
        engine: &'a RandomEngine,
        count: usize,
        draw: impl FnMut(&RandomEngine) -> T + 'a,
    ) -> Self {
        Self {
            engine,
            remaining: count,
            draw: Box::new(draw),
        }
    }
}

impl<T> Iterator for Draws<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.draw)(self.engine))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Draws<'_, T> {}

impl<T> FusedIterator for Draws<'_, T> {}

impl<T> fmt::Debug for Draws<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draws")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
