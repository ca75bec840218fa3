//! Lagged subtractive generator
//!
//! Each new value is the difference of two earlier values held in a
//! circular 55-slot table. Two cursors walk the table in lockstep,
//! `PRIME_OFFSET` slots apart.
//!
//! # Domain
//!
//! `0xBADDAD - |seed|` is negative for most seeds and enters the table
//! as-is, so seeding uses 32-bit two's complement (wrapping) arithmetic.
//! After the warm-up passes every entry lies in `[0, INT32_MAX]`, and every
//! sample lies in `[0, INT32_MAX)`.
//!
//! # Determinism
//!
//! Same seed → same table → same sequence of samples. The struct itself
//! is not synchronized; [`RandomEngine`](crate::RandomEngine) owns it
//! behind a mutex.

/// Largest value of a 32-bit signed integer; the modulus of the generator
pub const INT32_MAX: i32 = i32::MAX;

/// Number of slots in the state table
pub const TABLE_LEN: usize = 55;

/// Initial distance between the two cursors
pub const PRIME_OFFSET: usize = 42;

/// Constant the absolute seed is subtracted from
pub const SEED_CONSTANT: i32 = 0xBADDAD;

/// Stride used to scatter the running value across the table
const MIX_STRIDE: usize = 42;

/// Lag between the slots combined during the warm-up passes
const MIX_LAG: usize = 30;

/// Number of full warm-up passes over the table
const MIX_PASSES: usize = 4;

/// State of a lagged subtractive generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtractiveTable {
    table: [i32; TABLE_LEN],
    next_index: usize,
    next_prime_index: usize,
}

impl SubtractiveTable {
    /// Build and warm up the table for a numeric seed
    ///
    /// # Example
    /// ```
    /// use lagrand_core::rng::SubtractiveTable;
    ///
    /// let mut a = SubtractiveTable::seeded(12345);
    /// let mut b = SubtractiveTable::seeded(12345);
    /// assert_eq!(a.sample(), b.sample());
    /// ```
    pub fn seeded(seed: i32) -> Self {
        let subtraction = if seed == i32::MIN {
            INT32_MAX
        } else {
            seed.abs()
        };

        let mut mj = SEED_CONSTANT - subtraction;
        let mut table = [0i32; TABLE_LEN];
        table[TABLE_LEN - 1] = mj;

        let mut mk = 1;
        for i in 0..TABLE_LEN - 1 {
            // 42 is coprime with 55, so slots 0..=53 are each visited once
            let ii = (MIX_STRIDE * (i + 1)) % TABLE_LEN - 1;
            table[ii] = mk;
            mk = lift(mj.wrapping_sub(mk));
            mj = table[ii];
        }

        for _ in 0..MIX_PASSES {
            for i in 0..TABLE_LEN {
                table[i] = lift(table[i].wrapping_sub(table[(i + MIX_LAG) % TABLE_LEN]));
            }
        }

        Self {
            table,
            next_index: 0,
            next_prime_index: PRIME_OFFSET,
        }
    }

    /// Rebuild a table from previously captured parts
    ///
    /// Callers are responsible for validating the parts; see
    /// [`EngineSnapshot::validate`](crate::EngineSnapshot::validate).
    pub(crate) fn from_parts(
        table: [i32; TABLE_LEN],
        next_index: usize,
        next_prime_index: usize,
    ) -> Self {
        Self {
            table,
            next_index,
            next_prime_index,
        }
    }

    /// Generate the next raw sample in `[0, INT32_MAX)`
    ///
    /// This is the single mutation point of generator state.
    pub fn sample(&mut self) -> i32 {
        let mut value = self.table[self.next_index] - self.table[self.next_prime_index];

        if value == INT32_MAX {
            value -= 1;
        }
        if value < 0 {
            value += INT32_MAX;
        }

        self.table[self.next_index] = value;
        self.next_index = (self.next_index + 1) % TABLE_LEN;
        self.next_prime_index = (self.next_prime_index + 1) % TABLE_LEN;

        value
    }

    /// Current table contents
    pub fn table(&self) -> &[i32; TABLE_LEN] {
        &self.table
    }

    /// Slot the next sample is written to
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Slot subtracted from `next_index` on the next sample
    pub fn next_prime_index(&self) -> usize {
        self.next_prime_index
    }
}

/// Add the modulus back onto a negative difference
fn lift(value: i32) -> i32 {
    if value < 0 {
        value.wrapping_add(INT32_MAX)
    } else {
        value
    }
}
