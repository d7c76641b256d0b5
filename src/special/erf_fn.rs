//! Error function and the normal CDF built on it.
//!
//! `erf` is the Abramowitz–Stegun 7.1.26 rational approximation, accurate to
//! |ε| < 1.5e-7 over the whole real line.

use crate::FloatScalar;

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Error function erf(x).
///
/// erf(x) = (2/√π) ∫₀ˣ e^{−t²} dt, approximated by
/// 1 − (a₁t + a₂t² + a₃t³ + a₄t⁴ + a₅t⁵) e^{−x²} with t = 1/(1 + p|x|),
/// mirrored for negative x.
///
/// # Example
///
/// ```
/// use distlab::special::erf;
///
/// assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 2e-7);
/// assert!((erf(-1.0_f64) + 0.8427007929497149).abs() < 2e-7);
/// ```
pub fn erf<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    let one = T::one();
    let sign = if x < T::zero() { -one } else { one };
    let x = x.abs();

    let t = one / (one + T::lit(P) * x);
    let poly = ((((T::lit(A5) * t + T::lit(A4)) * t + T::lit(A3)) * t + T::lit(A2)) * t
        + T::lit(A1))
        * t;
    sign * (one - poly * (-x * x).exp())
}

/// Normal cumulative distribution function P(X ≤ x) for X ~ N(mean, std_dev²).
///
/// `0.5 · (1 + erf((x − mean) / (std_dev · √2)))`, so it inherits the
/// 1.5e-7 accuracy of [`erf`].
///
/// # Example
///
/// ```
/// use distlab::special::normal_cdf;
///
/// assert!((normal_cdf(0.0_f64, 0.0, 1.0) - 0.5).abs() < 1e-7);
/// assert!((normal_cdf(1.96_f64, 0.0, 1.0) - 0.975).abs() < 1e-4);
/// ```
pub fn normal_cdf<T: FloatScalar>(x: T, mean: T, std_dev: T) -> T {
    let half = T::lit(0.5);
    let sqrt2 = T::lit(core::f64::consts::SQRT_2);
    half * (T::one() + erf((x - mean) / (std_dev * sqrt2)))
}
