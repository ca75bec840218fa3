//! Shuffling and weighted selection
//!
//! Weighted choices behave as if every candidate were repeated `weight`
//! times in a flattened pool (candidates with weight <= 0 left out) and one
//! entry of that pool were picked uniformly. The pool is never built: one
//! index in `[0, total_weight)` is drawn and located by walking the
//! cumulative weights, which yields the same candidate.
//!
//! A pool with a single entry is picked without drawing a sample.

use crate::draws::Draws;
use crate::engine::RandomEngine;
use crate::error::{RandomError, Result};
use crate::range::{check_buffer, check_count};
use crate::weight::{locate, total_weight, Weighted, WeightedEnum, WeightedValue};

fn check_items<T>(items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(RandomError::EmptyCollection { parameter: "items" });
    }
    Ok(())
}

fn value_weight<T>(item: &WeightedValue<T>) -> i32 {
    item.weight
}

/// Total weight of `items`, rejecting empty or fully excluded inputs
fn selectable_weight<T>(items: &[T], weight: impl Fn(&T) -> i32) -> Result<i64> {
    check_items(items)?;
    let total = total_weight(items.iter().map(&weight));
    if total == 0 {
        return Err(RandomError::NoSelectableValues { parameter: "items" });
    }
    Ok(total)
}

impl RandomEngine {
    fn pick_uniform<'a, T>(&self, items: &'a [T]) -> &'a T {
        let index = self.scaled_offset(items.len() as i64) as usize;
        &items[index]
    }

    fn pick_weighted<'a, T>(
        &self,
        items: &'a [T],
        total: i64,
        weight: impl Fn(&T) -> i32,
    ) -> &'a T {
        let target = self.scaled_offset(total);
        // total counts exactly the positive weights, so target always lands
        let index = locate(items.iter().map(weight), target).unwrap_or(items.len() - 1);
        &items[index]
    }

    // ------------------------------------------------------------------
    // Shuffle
    // ------------------------------------------------------------------

    /// Shuffle `items` in place (Fisher–Yates)
    ///
    /// # Errors
    /// [`RandomError::EmptyCollection`] if `items` is empty.
    ///
    /// # Example
    /// ```
    /// use lagrand_core::RandomEngine;
    ///
    /// let engine = RandomEngine::with_seed(42);
    /// let mut deck: Vec<u32> = (1..=52).collect();
    /// engine.shuffle(&mut deck).unwrap();
    /// deck.sort_unstable();
    /// assert_eq!(deck, (1..=52).collect::<Vec<_>>());
    /// ```
    pub fn shuffle<T>(&self, items: &mut [T]) -> Result<()> {
        check_items(items)?;
        for i in (1..items.len()).rev() {
            let j = self.scaled_offset(i as i64 + 1) as usize;
            items.swap(i, j);
        }
        Ok(())
    }

    /// Shuffled copy of `items`
    pub fn shuffled<T: Clone>(&self, items: &[T]) -> Result<Vec<T>> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy)?;
        Ok(copy)
    }

    // ------------------------------------------------------------------
    // Uniform choice
    // ------------------------------------------------------------------

    /// Uniformly chosen element of `items`
    ///
    /// # Errors
    /// [`RandomError::EmptyCollection`] if `items` is empty.
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Result<&'a T> {
        check_items(items)?;
        Ok(self.pick_uniform(items))
    }

    /// Fill `buffer` with uniformly chosen elements of `items`
    pub fn fill_choices<T: Clone>(&self, buffer: &mut [T], items: &[T]) -> Result<()> {
        check_buffer(buffer)?;
        check_items(items)?;
        self.fill_with(buffer, |e| e.pick_uniform(items).clone())
    }

    /// `count` lazily chosen elements of `items`
    pub fn choices<'a, T>(&'a self, items: &'a [T], count: usize) -> Result<Draws<'a, &'a T>> {
        check_count(count)?;
        check_items(items)?;
        self.draws(count, move |e| e.pick_uniform(items))
    }

    // ------------------------------------------------------------------
    // Self-weighted choice
    // ------------------------------------------------------------------

    /// Element of `items` chosen in proportion to its own weight
    ///
    /// # Errors
    /// [`RandomError::EmptyCollection`] if `items` is empty;
    /// [`RandomError::NoSelectableValues`] if no weight is positive.
    pub fn choose_weighted<'a, T: Weighted>(&self, items: &'a [T]) -> Result<&'a T> {
        let total = selectable_weight(items, T::weight)?;
        Ok(self.pick_weighted(items, total, T::weight))
    }

    /// Fill `buffer` with elements of `items` chosen by weight
    pub fn fill_weighted<T: Weighted + Clone>(&self, buffer: &mut [T], items: &[T]) -> Result<()> {
        check_buffer(buffer)?;
        let total = selectable_weight(items, T::weight)?;
        self.fill_with(buffer, |e| e.pick_weighted(items, total, T::weight).clone())
    }

    /// `count` lazily chosen elements of `items`, by weight
    pub fn weighted_choices<'a, T: Weighted>(
        &'a self,
        items: &'a [T],
        count: usize,
    ) -> Result<Draws<'a, &'a T>> {
        check_count(count)?;
        let total = selectable_weight(items, T::weight)?;
        self.draws(count, move |e| e.pick_weighted(items, total, T::weight))
    }

    // ------------------------------------------------------------------
    // Externally weighted choice
    // ------------------------------------------------------------------

    /// Value of a [`WeightedValue`] chosen in proportion to its weight
    ///
    /// # Example
    /// ```
    /// use lagrand_core::{RandomEngine, WeightedValue};
    ///
    /// let engine = RandomEngine::with_seed(7);
    /// let loot = [
    ///     WeightedValue::new("copper", 90),
    ///     WeightedValue::new("silver", 10),
    ///     WeightedValue::new("cursed", 0),
    /// ];
    /// let pick = engine.choose_value(&loot).unwrap();
    /// assert_ne!(*pick, "cursed");
    /// ```
    pub fn choose_value<'a, T>(&self, items: &'a [WeightedValue<T>]) -> Result<&'a T> {
        self.choose_weighted(items).map(|picked| &picked.value)
    }

    /// Fill `buffer` with values chosen from `items` by weight
    pub fn fill_values<T: Clone>(
        &self,
        buffer: &mut [T],
        items: &[WeightedValue<T>],
    ) -> Result<()> {
        check_buffer(buffer)?;
        let total = selectable_weight(items, value_weight)?;
        self.fill_with(buffer, |e| e.pick_weighted(items, total, value_weight).value.clone())
    }

    /// `count` lazily chosen values from `items`, by weight
    pub fn value_choices<'a, T>(
        &'a self,
        items: &'a [WeightedValue<T>],
        count: usize,
    ) -> Result<Draws<'a, &'a T>> {
        check_count(count)?;
        let total = selectable_weight(items, value_weight)?;
        self.draws(count, move |e| &e.pick_weighted(items, total, value_weight).value)
    }

    // ------------------------------------------------------------------
    // Enum choice
    // ------------------------------------------------------------------

    /// Constant of `E` chosen in proportion to its declared weight
    ///
    /// # Errors
    /// [`RandomError::EmptyCollection`] if `E` has no constants;
    /// [`RandomError::NoSelectableValues`] if no weight is positive.
    pub fn choose_enum<E: WeightedEnum>(&self) -> Result<E> {
        let total = selectable_weight(E::VARIANTS, E::weight)?;
        Ok(*self.pick_weighted(E::VARIANTS, total, E::weight))
    }

    /// Fill `buffer` with constants of `E` chosen by weight
    pub fn fill_enum<E: WeightedEnum>(&self, buffer: &mut [E]) -> Result<()> {
        check_buffer(buffer)?;
        let total = selectable_weight(E::VARIANTS, E::weight)?;
        self.fill_with(buffer, |e| *e.pick_weighted(E::VARIANTS, total, E::weight))
    }

    /// `count` lazily chosen constants of `E`, by weight
    pub fn enum_choices<E: WeightedEnum>(&self, count: usize) -> Result<Draws<'_, E>> {
        check_count(count)?;
        let total = selectable_weight(E::VARIANTS, E::weight)?;
        self.draws(count, move |e| *e.pick_weighted(E::VARIANTS, total, E::weight))
    }
}
