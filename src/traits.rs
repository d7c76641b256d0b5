use core::fmt::Debug;
use num_traits::{Float, NumCast};

/// Trait for floating-point scalars accepted by the special functions.
///
/// Blanket-implemented for all types satisfying the bounds, which covers
/// `f32` and `f64`. The distribution engine itself works in `f64`.
pub trait FloatScalar: Copy + PartialEq + PartialOrd + Debug + Float {
    /// Convert an `f64` constant to `Self` (rounded for `f32`).
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl<T: Copy + PartialEq + PartialOrd + Debug + Float> FloatScalar for T {}
