//! Special mathematical functions.
//!
//! Provides the gamma function, factorial, binomial coefficient, error
//! function and the normal CDF used by the distribution families.
//! All functions are generic over [`FloatScalar`] (f32/f64) and signal
//! domain errors with NaN or infinity rather than panicking.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(z) (Lanczos, g = 7) |
//! | [`lgamma`] | ln Γ(x), finite where Γ overflows |
//! | [`factorial`] | n! for non-negative integers, NaN otherwise |
//! | [`binomial_coefficient`] | C(n, k), rounded to the nearest integer |
//! | [`ln_binomial_coefficient`] | ln C(n, k) via [`lgamma`] |
//! | [`erf`] | Error function (Abramowitz–Stegun 7.1.26) |
//! | [`normal_cdf`] | Normal CDF Φ((x − μ)/σ) |
//!
//! # Example
//!
//! ```
//! use distlab::special::{binomial_coefficient, erf, factorial, gamma};
//!
//! // Γ(6) = 5! = 120
//! assert!((gamma(6.0_f64) - 120.0).abs() < 1e-9);
//! assert_eq!(factorial(5.0_f64), 120.0);
//!
//! // C(n, k) = C(n, n − k)
//! assert_eq!(binomial_coefficient(20.0_f64, 3.0), binomial_coefficient(20.0, 17.0));
//!
//! // erf(0) = 0 to within the approximation error
//! assert!(erf(0.0_f64).abs() < 1.5e-7);
//! ```

use crate::FloatScalar;

mod erf_fn;
mod factorial_fn;
mod gamma_fn;


pub use erf_fn::{erf, normal_cdf};
pub use factorial_fn::{binomial_coefficient, factorial, ln_binomial_coefficient};
pub use gamma_fn::{gamma, lgamma};

/// Euler–Mascheroni constant γₑ.
pub const EULER_MASCHERONI: f64 = 0.5772156649015329;

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    let mut sum = T::lit(LANCZOS_COEFFS[0]);
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        let denom = z + T::lit((i + 1) as f64);
        sum = sum + T::lit(c) / denom;
    }
    sum
}
