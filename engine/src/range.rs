//! Range mapping
//!
//! Converts raw samples into bounded integers, bytes, floats, doubles and
//! booleans. Every operation comes in three forms:
//!
//! - scalar (`next_int_in`),
//! - buffer fill (`fill_ints_in`),
//! - lazy sequence (`ints_in`, returning [`Draws`]).
//!
//! Bounds are validated before any sample is drawn.
//!
//! | values | bounds |
//! |---|---|
//! | integers | `[min, max)` |
//! | bytes | `[min, max]` |
//! | floats, doubles | `[min, max]` |

use crate::draws::Draws;
use crate::engine::RandomEngine;
use crate::error::{RandomError, Result};

pub(crate) fn check_buffer<T>(buffer: &[T]) -> Result<()> {
    if buffer.is_empty() {
        return Err(RandomError::EmptyCollection {
            parameter: "buffer",
        });
    }
    Ok(())
}

pub(crate) fn check_count(count: usize) -> Result<()> {
    if count < 1 {
        return Err(RandomError::InvalidCount {
            parameter: "count",
            count,
        });
    }
    Ok(())
}

fn check_int_range(min: i32, max: i32) -> Result<()> {
    if min >= max {
        return Err(RandomError::exclusive_range(min, max));
    }
    Ok(())
}

fn check_byte_range(min: u8, max: u8) -> Result<()> {
    if min > max {
        return Err(RandomError::inclusive_range(min, max));
    }
    Ok(())
}

fn check_real_range(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(RandomError::inclusive_range(min, max));
    }
    Ok(())
}

fn check_odds(numerator: i32, denominator: i32) -> Result<()> {
    if denominator == 0 {
        return Err(RandomError::DivisionByZero { numerator });
    }
    Ok(())
}

impl RandomEngine {
    // ------------------------------------------------------------------
    // Shared plumbing
    // ------------------------------------------------------------------

    pub(crate) fn fill_with<T>(
        &self,
        buffer: &mut [T],
        mut draw: impl FnMut(&RandomEngine) -> T,
    ) -> Result<()> {
        check_buffer(buffer)?;
        for slot in buffer.iter_mut() {
            *slot = draw(self);
        }
        Ok(())
    }

    pub(crate) fn draws<'a, T>(
        &'a self,
        count: usize,
        draw: impl FnMut(&RandomEngine) -> T + 'a,
    ) -> Result<Draws<'a, T>> {
        check_count(count)?;
        Ok(Draws::new(self, count, draw))
    }

    /// Offset in `[0, width)`; a width of 1 draws nothing
    pub(crate) fn scaled_offset(&self, width: i64) -> i64 {
        if width == 1 {
            return 0;
        }
        (self.next_unit(false) * width as f64) as i64
    }

    fn scale_int(&self, min: i32, max: i32) -> i32 {
        let width = i64::from(max) - i64::from(min);
        (i64::from(min) + self.scaled_offset(width)) as i32
    }

    fn scale_byte(&self, min: u8, max: u8) -> u8 {
        if min == max {
            return min;
        }
        self.scale_int(i32::from(min), i32::from(max) + 1) as u8
    }

    fn scale_double(&self, min: f64, max: f64) -> f64 {
        if min == max {
            return min;
        }
        let unit = self.next_unit(true);
        let width = max - min;
        let value = if width.is_finite() {
            unit * width + min
        } else {
            // Span exceeds f64::MAX; interpolate instead of subtracting
            min * (1.0 - unit) + max * unit
        };
        value.clamp(min, max)
    }

    fn scale_float(&self, min: f32, max: f32) -> f32 {
        if min == max {
            return min;
        }
        let value = self.scale_double(f64::from(min), f64::from(max)) as f32;
        value.clamp(min, max)
    }

    fn probability(&self, p: f64) -> bool {
        if p >= 1.0 {
            true
        } else if p.is_nan() || p <= 0.0 {
            false
        } else {
            self.next_unit(false) < p
        }
    }

    fn percent(&self, percent: i32) -> bool {
        if percent >= 100 {
            true
        } else if percent <= 0 {
            false
        } else {
            self.probability(f64::from(percent) / 100.0)
        }
    }

    fn odds_of(&self, numerator: i32, denominator: i32) -> bool {
        self.probability(f64::from(numerator) / f64::from(denominator))
    }

    // ------------------------------------------------------------------
    // Integers
    // ------------------------------------------------------------------

    /// Integer in `[0, i32::MAX)`
    pub fn next_int(&self) -> i32 {
        self.next_sample()
    }

    /// Integer in `[min, max)`
    ///
    /// A range of width one returns `min` without drawing a sample.
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] if `min >= max`.
    ///
    /// # Example
    /// ```
    /// use lagrand_core::RandomEngine;
    ///
    /// let engine = RandomEngine::with_seed(12345);
    /// let amount = engine.next_int_in(10_000, 100_000).unwrap();
    /// assert!((10_000..100_000).contains(&amount));
    /// assert!(engine.next_int_in(5, 5).is_err());
    /// ```
    pub fn next_int_in(&self, min: i32, max: i32) -> Result<i32> {
        check_int_range(min, max)?;
        Ok(self.scale_int(min, max))
    }

    /// Fill `buffer` with integers in `[0, i32::MAX)`
    pub fn fill_ints(&self, buffer: &mut [i32]) -> Result<()> {
        self.fill_with(buffer, RandomEngine::next_int)
    }

    /// Fill `buffer` with integers in `[min, max)`
    pub fn fill_ints_in(&self, buffer: &mut [i32], min: i32, max: i32) -> Result<()> {
        check_buffer(buffer)?;
        check_int_range(min, max)?;
        self.fill_with(buffer, |e| e.scale_int(min, max))
    }

    /// `count` lazily drawn integers in `[0, i32::MAX)`
    pub fn ints(&self, count: usize) -> Result<Draws<'_, i32>> {
        self.draws(count, RandomEngine::next_int)
    }

    /// `count` lazily drawn integers in `[min, max)`
    pub fn ints_in(&self, count: usize, min: i32, max: i32) -> Result<Draws<'_, i32>> {
        check_count(count)?;
        check_int_range(min, max)?;
        self.draws(count, move |e| e.scale_int(min, max))
    }

    // ------------------------------------------------------------------
    // Bytes
    // ------------------------------------------------------------------

    /// Byte in `[0, 255]`
    pub fn next_byte(&self) -> u8 {
        self.scale_byte(u8::MIN, u8::MAX)
    }

    /// Byte in `[min, max]`
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] if `min > max`.
    pub fn next_byte_in(&self, min: u8, max: u8) -> Result<u8> {
        check_byte_range(min, max)?;
        Ok(self.scale_byte(min, max))
    }

    /// Fill `buffer` with bytes in `[0, 255]`
    pub fn fill_bytes(&self, buffer: &mut [u8]) -> Result<()> {
        self.fill_with(buffer, RandomEngine::next_byte)
    }

    /// Fill `buffer` with bytes in `[min, max]`
    pub fn fill_bytes_in(&self, buffer: &mut [u8], min: u8, max: u8) -> Result<()> {
        check_buffer(buffer)?;
        check_byte_range(min, max)?;
        self.fill_with(buffer, |e| e.scale_byte(min, max))
    }

    /// `count` lazily drawn bytes in `[0, 255]`
    pub fn bytes(&self, count: usize) -> Result<Draws<'_, u8>> {
        self.draws(count, RandomEngine::next_byte)
    }

    /// `count` lazily drawn bytes in `[min, max]`
    pub fn bytes_in(&self, count: usize, min: u8, max: u8) -> Result<Draws<'_, u8>> {
        check_count(count)?;
        check_byte_range(min, max)?;
        self.draws(count, move |e| e.scale_byte(min, max))
    }

    // ------------------------------------------------------------------
    // Floats
    // ------------------------------------------------------------------

    /// Float in `[0, 1]`
    pub fn next_float(&self) -> f32 {
        self.scale_float(0.0, 1.0)
    }

    /// Float in `[min, max]`
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] if `min > max` or either bound is not
    /// finite.
    pub fn next_float_in(&self, min: f32, max: f32) -> Result<f32> {
        check_real_range(f64::from(min), f64::from(max))?;
        Ok(self.scale_float(min, max))
    }

    /// Fill `buffer` with floats in `[0, 1]`
    pub fn fill_floats(&self, buffer: &mut [f32]) -> Result<()> {
        self.fill_with(buffer, RandomEngine::next_float)
    }

    /// Fill `buffer` with floats in `[min, max]`
    pub fn fill_floats_in(&self, buffer: &mut [f32], min: f32, max: f32) -> Result<()> {
        check_buffer(buffer)?;
        check_real_range(f64::from(min), f64::from(max))?;
        self.fill_with(buffer, |e| e.scale_float(min, max))
    }

    /// `count` lazily drawn floats in `[0, 1]`
    pub fn floats(&self, count: usize) -> Result<Draws<'_, f32>> {
        self.draws(count, RandomEngine::next_float)
    }

    /// `count` lazily drawn floats in `[min, max]`
    pub fn floats_in(&self, count: usize, min: f32, max: f32) -> Result<Draws<'_, f32>> {
        check_count(count)?;
        check_real_range(f64::from(min), f64::from(max))?;
        self.draws(count, move |e| e.scale_float(min, max))
    }

    // ------------------------------------------------------------------
    // Doubles
    // ------------------------------------------------------------------

    /// Double in `[0, 1]`
    pub fn next_double(&self) -> f64 {
        self.scale_double(0.0, 1.0)
    }

    /// Double in `[min, max]`
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] if `min > max` or either bound is not
    /// finite.
    ///
    /// # Example
    /// ```
    /// use lagrand_core::RandomEngine;
    ///
    /// let engine = RandomEngine::with_seed(99999);
    /// let rate = engine.next_double_in(0.5, 1.5).unwrap();
    /// assert!((0.5..=1.5).contains(&rate));
    /// ```
    pub fn next_double_in(&self, min: f64, max: f64) -> Result<f64> {
        check_real_range(min, max)?;
        Ok(self.scale_double(min, max))
    }

    /// Fill `buffer` with doubles in `[0, 1]`
    pub fn fill_doubles(&self, buffer: &mut [f64]) -> Result<()> {
        self.fill_with(buffer, RandomEngine::next_double)
    }

    /// Fill `buffer` with doubles in `[min, max]`
    pub fn fill_doubles_in(&self, buffer: &mut [f64], min: f64, max: f64) -> Result<()> {
        check_buffer(buffer)?;
        check_real_range(min, max)?;
        self.fill_with(buffer, |e| e.scale_double(min, max))
    }

    /// `count` lazily drawn doubles in `[0, 1]`
    pub fn doubles(&self, count: usize) -> Result<Draws<'_, f64>> {
        self.draws(count, RandomEngine::next_double)
    }

    /// `count` lazily drawn doubles in `[min, max]`
    pub fn doubles_in(&self, count: usize, min: f64, max: f64) -> Result<Draws<'_, f64>> {
        check_count(count)?;
        check_real_range(min, max)?;
        self.draws(count, move |e| e.scale_double(min, max))
    }

    // ------------------------------------------------------------------
    // Booleans
    // ------------------------------------------------------------------

    /// Fair coin flip
    pub fn next_bool(&self) -> bool {
        self.scale_int(0, 2) == 1
    }

    /// Fill `buffer` with fair coin flips
    pub fn fill_bools(&self, buffer: &mut [bool]) -> Result<()> {
        self.fill_with(buffer, RandomEngine::next_bool)
    }

    /// `count` lazily drawn fair coin flips
    pub fn bools(&self, count: usize) -> Result<Draws<'_, bool>> {
        self.draws(count, RandomEngine::next_bool)
    }

    /// `true` with probability `p`
    ///
    /// `p >= 1` is always true; `p <= 0` and NaN are always false. None of
    /// these draws a sample.
    pub fn next_probability(&self, p: f64) -> bool {
        self.probability(p)
    }

    /// Fill `buffer` with outcomes that are `true` with probability `p`
    pub fn fill_probability(&self, buffer: &mut [bool], p: f64) -> Result<()> {
        self.fill_with(buffer, |e| e.probability(p))
    }

    /// `count` lazily drawn outcomes that are `true` with probability `p`
    pub fn probabilities(&self, count: usize, p: f64) -> Result<Draws<'_, bool>> {
        self.draws(count, move |e| e.probability(p))
    }

    /// `true` with probability `percent / 100`
    pub fn next_percent(&self, percent: i32) -> bool {
        self.percent(percent)
    }

    /// Fill `buffer` with outcomes that are `true` `percent`% of the time
    pub fn fill_percent(&self, buffer: &mut [bool], percent: i32) -> Result<()> {
        self.fill_with(buffer, |e| e.percent(percent))
    }

    /// `count` lazily drawn outcomes that are `true` `percent`% of the time
    pub fn percents(&self, count: usize, percent: i32) -> Result<Draws<'_, bool>> {
        self.draws(count, move |e| e.percent(percent))
    }

    /// `true` with odds of `numerator` in `denominator`
    ///
    /// # Errors
    /// [`RandomError::DivisionByZero`] if `denominator == 0`.
    ///
    /// # Example
    /// ```
    /// use lagrand_core::RandomEngine;
    ///
    /// let engine = RandomEngine::with_seed(1);
    /// assert!(engine.next_odds(3, 3).unwrap());
    /// assert!(engine.next_odds(1, 0).is_err());
    /// ```
    pub fn next_odds(&self, numerator: i32, denominator: i32) -> Result<bool> {
        check_odds(numerator, denominator)?;
        Ok(self.odds_of(numerator, denominator))
    }

    /// Fill `buffer` with outcomes at odds of `numerator` in `denominator`
    pub fn fill_odds(&self, buffer: &mut [bool], numerator: i32, denominator: i32) -> Result<()> {
        check_buffer(buffer)?;
        check_odds(numerator, denominator)?;
        self.fill_with(buffer, |e| e.odds_of(numerator, denominator))
    }

    /// `count` lazily drawn outcomes at odds of `numerator` in `denominator`
    pub fn odds(&self, count: usize, numerator: i32, denominator: i32) -> Result<Draws<'_, bool>> {
        check_count(count)?;
        check_odds(numerator, denominator)?;
        self.draws(count, move |e| e.odds_of(numerator, denominator))
    }
}
