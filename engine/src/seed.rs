//! Seed parsing and synthesis
//!
//! A seed is either numeric or free text. The text form is what callers
//! see and persist; the numeric form is what initializes the table.
//!
//! - Text that parses as an `i32` (surrounding whitespace ignored) is used
//!   as that number, and the original text is kept verbatim.
//! - Any other text is hashed with SHA-256; the first four digest bytes
//!   (big-endian) give the numeric seed.
//! - With no seed at all, a number is folded out of a fresh UUID v4 and
//!   its decimal form becomes the seed text, so a reset reproduces it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Seed supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seed {
    /// Numeric seed used as-is
    Numeric(i32),
    /// Text seed; parsed as a number when possible, hashed otherwise
    Text(String),
}

impl Seed {
    /// Synthesize an unpredictable numeric seed
    pub fn random() -> Self {
        let folded = Uuid::new_v4()
            .as_u128()
            .to_le_bytes()
            .chunks_exact(4)
            .fold(0u32, |acc, chunk| {
                acc ^ u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
            });
        let seed = Seed::Numeric(folded as i32);
        tracing::trace!(seed = %seed, "synthesized seed");
        seed
    }

    /// Interpret arbitrary text as a seed
    ///
    /// # Example
    /// ```
    /// use lagrand_core::Seed;
    ///
    /// assert_eq!(Seed::parse("42").numeric(), 42);
    /// assert_eq!(Seed::parse("42").text(), "42");
    /// assert_eq!(Seed::parse("dungeon-7").text(), "dungeon-7");
    /// ```
    pub fn parse(text: impl Into<String>) -> Self {
        Seed::Text(text.into())
    }

    /// Numeric value that initializes the state table
    pub fn numeric(&self) -> i32 {
        match self {
            Seed::Numeric(value) => *value,
            Seed::Text(text) => match text.trim().parse::<i32>() {
                Ok(value) => value,
                Err(_) => hash_text(text),
            },
        }
    }

    /// Externally visible seed text
    pub fn text(&self) -> String {
        match self {
            Seed::Numeric(value) => value.to_string(),
            Seed::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Numeric(value) => write!(f, "{}", value),
            Seed::Text(text) => f.write_str(text),
        }
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Numeric(value)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

/// Stable numeric hash of seed text
///
/// Unlike `std::hash`, the result never changes between processes,
/// platforms or releases.
pub fn hash_text(text: &str) -> i32 {
    let digest = Sha256::digest(text.as_bytes());
    let value = i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    tracing::trace!(text, value, "hashed text seed");
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_keeps_original_text() {
        let seed = Seed::parse(" 0042 ");
        assert_eq!(seed.numeric(), 42);
        assert_eq!(seed.text(), " 0042 ");
    }

    #[test]
    fn test_signed_and_extreme_text() {
        assert_eq!(Seed::parse("-17").numeric(), -17);
        assert_eq!(Seed::parse("+17").numeric(), 17);
        assert_eq!(Seed::parse("-2147483648").numeric(), i32::MIN);
        assert_eq!(Seed::parse("2147483647").numeric(), i32::MAX);
    }

    #[test]
    fn test_out_of_range_number_is_hashed() {
        let seed = Seed::parse("2147483648");
        assert_eq!(seed.numeric(), hash_text("2147483648"));
    }

    #[test]
    fn test_text_hash_is_stable() {
        // SHA-256("abc") = ba7816bf...
        assert_eq!(hash_text("abc"), i32::from_be_bytes([0xba, 0x78, 0x16, 0xbf]));
        assert_eq!(Seed::parse("abc").numeric(), hash_text("abc"));
    }

    #[test]
    fn test_numeric_seed_text_round_trips() {
        let seed = Seed::from(-99);
        assert_eq!(seed.text(), "-99");
        assert_eq!(Seed::parse(seed.text()).numeric(), -99);
    }

    #[test]
    fn test_random_seed_text_reparses_to_same_number() {
        let seed = Seed::random();
        assert_eq!(Seed::parse(seed.text()).numeric(), seed.numeric());
    }

    #[test]
    fn test_display_matches_text() {
        assert_eq!(Seed::from(5).to_string(), "5");
        assert_eq!(Seed::from("moss").to_string(), "moss");
    }
}
