//! Factorial and binomial coefficient in floating point.

use crate::FloatScalar;

/// Factorial n! by iterative product.
///
/// Returns NaN for negative or non-integer `n` (and for NaN input);
/// `0! = 1! = 1`. Overflows to infinity past 170! in `f64`, and stops
/// multiplying once it has.
///
/// # Example
///
/// ```
/// use distlab::special::factorial;
///
/// assert_eq!(factorial(0.0_f64), 1.0);
/// assert_eq!(factorial(6.0_f64), 720.0);
/// assert!(factorial(2.5_f64).is_nan());
/// assert!(factorial(-1.0_f64).is_nan());
/// ```
pub fn factorial<T: FloatScalar>(n: T) -> T {
    let one = T::one();
    if n.is_nan() || n < T::zero() || n != n.floor() || n.is_infinite() {
        return T::nan();
    }
    if n <= one {
        return one;
    }
    let mut result = one;
    let mut i = one + one;
    while i <= n {
        result = result * i;
        if result.is_infinite() {
            break;
        }
        i = i + one;
    }
    result
}

/// Binomial coefficient C(n, k).
///
/// Returns 0 when `k < 0` or `k > n`, and 1 when `k` is 0 or `n`.
/// Otherwise uses the multiplicative recurrence
/// `r = (r · (n − i)) / (i + 1)` for `i` in `0..min(k, n − k)` and rounds
/// the result to the nearest integer (ties toward +∞). The operation order
/// is fixed: changing it changes the rounding on large arguments.
/// Returns +∞ as soon as the running product overflows; see
/// [`ln_binomial_coefficient`] for those arguments.
///
/// # Example
///
/// ```
/// use distlab::special::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(5.0_f64, 2.0), 10.0);
/// assert_eq!(binomial_coefficient(20.0_f64, 10.0), 184756.0);
/// assert_eq!(binomial_coefficient(4.0_f64, 7.0), 0.0);
/// ```
pub fn binomial_coefficient<T: FloatScalar>(n: T, k: T) -> T {
    let zero = T::zero();
    let one = T::one();
    if k > n || k < zero {
        return zero;
    }
    if k == zero || k == n {
        return one;
    }
    let k = k.min(n - k);
    let mut result = one;
    let mut i = zero;
    while i < k {
        result = (result * (n - i)) / (i + one);
        if result.is_infinite() {
            return result;
        }
        i = i + one;
    }
    (result + T::lit(0.5)).floor()
}

/// Natural logarithm of C(n, k).
///
/// Stays finite where [`binomial_coefficient`] overflows (n above about
/// 1030 in `f64`). Sums `ln((n − i)/(i + 1))` when `min(k, n − k)` is
/// small, which keeps huge `n` accurate, and otherwise goes through
/// [`lgamma`](super::lgamma). Returns −∞ when `k < 0` or `k > n`.
///
/// ```
/// use distlab::special::ln_binomial_coefficient;
///
/// assert!((ln_binomial_coefficient(5.0_f64, 2.0) - 10.0_f64.ln()).abs() < 1e-12);
/// assert!(ln_binomial_coefficient(2000.0_f64, 1000.0).is_finite());
/// assert_eq!(ln_binomial_coefficient(4.0_f64, 7.0), f64::NEG_INFINITY);
/// ```
pub fn ln_binomial_coefficient<T: FloatScalar>(n: T, k: T) -> T {
    let zero = T::zero();
    let one = T::one();
    if k > n || k < zero {
        return T::neg_infinity();
    }
    if k == zero || k == n {
        return zero;
    }
    let k = k.min(n - k);
    if k < T::lit(LN_BINOMIAL_SUM_LIMIT) {
        let mut sum = zero;
        let mut i = zero;
        while i < k {
            sum = sum + ((n - i) / (i + one)).ln();
            i = i + one;
        }
        return sum;
    }
    super::lgamma(n + one) - super::lgamma(k + one) - super::lgamma(n - k + one)
}

/// Below this `min(k, n − k)`, [`ln_binomial_coefficient`] sums terms
/// instead of differencing ln Γ values.
const LN_BINOMIAL_SUM_LIMIT: f64 = 1024.0;
