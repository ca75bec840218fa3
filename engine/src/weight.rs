//! Weight capabilities
//!
//! A weight is an integer proportional to how often a value is picked.
//! Any weight <= 0 makes the value unselectable.
//!
//! - [`Weighted`]: values that carry their own weight
//! - [`WeightedValue`]: a value paired with an external weight
//! - [`WeightedEnum`]: enums whose constants carry weights, declared with
//!   [`weighted_enum!`](crate::weighted_enum)

use serde::{Deserialize, Serialize};

/// Weight used when none is declared
pub const DEFAULT_WEIGHT: i32 = 1;

/// A value that knows its own selection weight
pub trait Weighted {
    fn weight(&self) -> i32;
}

/// A value paired with an explicit selection weight
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedValue<T> {
    pub value: T,
    pub weight: i32,
}

impl<T> WeightedValue<T> {
    pub fn new(value: T, weight: i32) -> Self {
        Self { value, weight }
    }
}

impl<T> Weighted for WeightedValue<T> {
    fn weight(&self) -> i32 {
        self.weight
    }
}

impl<T> From<(T, i32)> for WeightedValue<T> {
    fn from((value, weight): (T, i32)) -> Self {
        Self { value, weight }
    }
}

/// An enum whose constants can be enumerated and weighted
///
/// Implement it by hand or with [`weighted_enum!`](crate::weighted_enum).
pub trait WeightedEnum: Copy + 'static {
    /// Every constant, in declaration order
    const VARIANTS: &'static [Self];

    /// Selection weight of this constant
    fn weight(&self) -> i32 {
        DEFAULT_WEIGHT
    }
}

/// Resolve the selection weight of an enum constant
///
/// Returns [`DEFAULT_WEIGHT`] for constants without a declared weight.
pub fn weight_of<E: WeightedEnum>(value: E) -> i32 {
    value.weight()
}

/// Sum of positive weights; non-positive weights contribute nothing
pub(crate) fn total_weight<I>(weights: I) -> i64
where
    I: IntoIterator<Item = i32>,
{
    weights
        .into_iter()
        .filter(|&w| w > 0)
        .map(i64::from)
        .sum()
}

/// Position of `target` in the flattened pool where each index appears
/// `weight` times
pub(crate) fn locate<I>(weights: I, mut target: i64) -> Option<usize>
where
    I: IntoIterator<Item = i32>,
{
    for (index, weight) in weights.into_iter().enumerate() {
        if weight <= 0 {
            continue;
        }
        if target < i64::from(weight) {
            return Some(index);
        }
        target -= i64::from(weight);
    }
    None
}

/// Declare an enum and implement [`WeightedEnum`] for it
///
/// Variants may carry a weight with `=> n`; the rest default to 1.
///
/// # Example
/// ```
/// use lagrand_core::{weight_of, weighted_enum};
///
/// weighted_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Rarity {
///         Common => 70,
///         Uncommon => 25,
///         Rare,
///         Retired => 0,
///     }
/// }
///
/// assert_eq!(weight_of(Rarity::Common), 70);
/// assert_eq!(weight_of(Rarity::Rare), 1);
/// ```
#[macro_export]
macro_rules! weighted_enum {
    (@weight) => {
        $crate::weight::DEFAULT_WEIGHT
    };
    (@weight $weight:expr) => {
        $weight
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $weight:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::WeightedEnum for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn weight(&self) -> i32 {
                match self {
                    $($name::$variant => $crate::weighted_enum!(@weight $($weight)?),)+
                }
            }
        }
    };
}
