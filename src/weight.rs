use std::fmt::Debug;

use num_traits::{Bounded, CheckedAdd, Float, Zero};
use ordered_float::OrderedFloat;

/// Capability required from an edge weight.
///
/// Addition and the additive identity come from [`Zero`], total ordering from
/// [`Ord`]. Floating point weights are used through [`OrderedFloat`], which
/// provides the total order that `f32`/`f64` lack.
pub trait Weight: Zero + Copy + Debug + Ord {
    /// Distance assigned to vertices that have not been reached.
    ///
    /// The native infinity for floating types, the largest representable
    /// value otherwise.
    fn infinity() -> Self;

    /// Converts a weight read from text input. Integer weights truncate
    /// toward zero.
    fn from_f64(value: f64) -> Self;

    /// `self + other`, or `None` when the sum is not representable.
    ///
    /// Floats never fail; they saturate to infinity on their own.
    fn try_add(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t as Bounded>::max_value()
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn try_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_weight!(i32, i64, u32, u64);

impl Weight for OrderedFloat<f64> {
    fn infinity() -> Self {
        OrderedFloat(<f64 as Float>::infinity())
    }

    fn from_f64(value: f64) -> Self {
        OrderedFloat(value)
    }

    fn try_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Weight for OrderedFloat<f32> {
    fn infinity() -> Self {
        OrderedFloat(<f32 as Float>::infinity())
    }

    fn from_f64(value: f64) -> Self {
        OrderedFloat(value as f32)
    }

    fn try_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}
