//! Probability distributions: five discrete and ten continuous families.
//!
//! Every family implements [`Distribution`], which gives a density (or mass)
//! at a point, closed-form summary statistics and a plotting sample over a
//! family-specific range. Families are plain `Copy` values built either from
//! typed arguments (`Normal::new(0.0, 1.0)`) or from a
//! [`ParameterSet`](crate::params::ParameterSet) via `from_params`.
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`Geometric`] | probability p | {0, 1, 2, …} (failures before success) |
//! | [`Hypergeometric`] | population N, successes K, draws n | {max(0, n−(N−K)), …, min(n, K)} |
//! | [`NegativeBinomial`] | successes r, probability p | {0, 1, 2, …} |
//! | [`UniformDiscrete`] | bounds a, b | {a, …, b} |
//!
//! # Continuous distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Uniform`] | lower a, upper b | [a, b] |
//! | [`Triangular`] | lower a, upper b, mode c | [a, b] |
//! | [`Logistic`] | location μ, scale s | (−∞, ∞) |
//! | [`Cauchy`] | location x₀, scale γ | (−∞, ∞) |
//! | [`Exponential`] | rate λ | [0, ∞) |
//! | [`Lognormal`] | log-mean μ, log-std σ | (0, ∞) |
//! | [`Gamma`] | shape α, rate β | (0, ∞) |
//! | [`Weibull`] | scale λ, shape k | [0, ∞) |
//! | [`MinimumExtreme`] | location μ, scale β | (−∞, ∞) |
//!
//! # Example
//!
//! ```
//! use distlab::stats::{Distribution, Normal};
//!
//! let n = Normal::new(0.0, 1.0).unwrap();
//! assert!((n.density(0.0) - 0.3989422804014327).abs() < 1e-12);
//! assert_eq!(n.statistics().mode, Some(0.0));
//! ```

use core::fmt;

pub(crate) mod binomial;
pub(crate) mod cauchy;
pub(crate) mod exponential;
pub(crate) mod gamma_dist;
pub(crate) mod geometric;
pub(crate) mod hypergeometric;
pub(crate) mod logistic;
pub(crate) mod lognormal;
pub(crate) mod minimum_extreme;
pub(crate) mod negative_binomial;
pub(crate) mod normal;
pub(crate) mod triangular;
pub(crate) mod uniform;
pub(crate) mod uniform_discrete;
pub(crate) mod weibull;

#[cfg(test)]
mod tests;

pub use binomial::Binomial;
pub use cauchy::Cauchy;
pub use exponential::Exponential;
pub use gamma_dist::Gamma;
pub use geometric::Geometric;
pub use hypergeometric::Hypergeometric;
pub use logistic::Logistic;
pub use lognormal::Lognormal;
pub use minimum_extreme::MinimumExtreme;
pub use negative_binomial::NegativeBinomial;
pub use normal::Normal;
pub use triangular::Triangular;
pub use uniform::Uniform;
pub use uniform_discrete::UniformDiscrete;
pub use weibull::Weibull;

/// Errors from resolving or validating distribution parameters.
///
/// These are distinct from a legitimately undefined statistic: the Cauchy
/// mean is `Ok` with a NaN value, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The parameter set has neither the symbol nor any alias, and the
    /// parameter has no fallback value.
    MissingParameter(&'static str),
    /// The parameter resolved to NaN or ±∞.
    NonFiniteParameter(&'static str),
    /// The parameter violates a precondition of the family (σ ≤ 0, b ≤ a, …).
    InvalidParameter(&'static str),
    /// No distribution is registered under the requested key.
    UnknownDistribution,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::MissingParameter(s) => write!(f, "missing distribution parameter `{s}`"),
            StatsError::NonFiniteParameter(s) => {
                write!(f, "distribution parameter `{s}` is not finite")
            }
            StatsError::InvalidParameter(s) => {
                write!(f, "distribution parameter `{s}` out of valid range")
            }
            StatsError::UnknownDistribution => write!(f, "unknown distribution"),
        }
    }
}

impl std::error::Error for StatsError {}

/// Whether a family has a probability mass or a probability density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    Discrete,
    Continuous,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Discrete => write!(f, "discrete"),
            Kind::Continuous => write!(f, "continuous"),
        }
    }
}

/// Summary statistics of a distribution.
///
/// `mean` and `variance` are NaN when the moment does not exist (Cauchy).
/// `mode` is `None` for the flat families, which have no single mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    pub mean: f64,
    pub variance: f64,
    pub mode: Option<f64>,
}

impl Statistics {
    /// Standard deviation √variance (NaN when the variance is undefined).
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Renders `mean`, `variance` and `mode` with three decimals, printing
/// `N/A` for non-finite values and for a missing mode.
///
/// ```
/// use distlab::stats::Statistics;
///
/// let s = Statistics { mean: f64::NAN, variance: f64::NAN, mode: Some(3.0) };
/// assert_eq!(s.to_string(), "mean: N/A, variance: N/A, mode: 3.000");
/// ```
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(f: &mut fmt::Formatter<'_>, v: Option<f64>) -> fmt::Result {
            match v {
                Some(v) if v.is_finite() => write!(f, "{v:.3}"),
                _ => write!(f, "N/A"),
            }
        }
        write!(f, "mean: ")?;
        field(f, Some(self.mean))?;
        write!(f, ", variance: ")?;
        field(f, Some(self.variance))?;
        write!(f, ", mode: ")?;
        field(f, self.mode)
    }
}

/// Evaluation points and the density at each point, ready for plotting.
///
/// `xs` is ascending and `xs.len() == ys.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleRange {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SampleRange {
    /// Evaluate `f` at every point of `xs`.
    pub fn tabulate(xs: Vec<f64>, f: impl Fn(f64) -> f64) -> Self {
        let ys = xs.iter().map(|&x| f(x)).collect();
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, density)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Common interface of all distribution families.
///
/// `density` is the probability mass for discrete families and the
/// probability density for continuous ones. It is exactly `0.0` outside the
/// support (and at non-integer points of a discrete family).
pub trait Distribution {
    /// Discrete or continuous.
    fn kind(&self) -> Kind;
    /// Probability mass or density at `x`.
    fn density(&self, x: f64) -> f64;
    /// Expected value E\[X\] (NaN when undefined).
    fn mean(&self) -> f64;
    /// Variance Var(X) (NaN when undefined).
    fn variance(&self) -> f64;
    /// Location of the maximum density, if the family has a single one.
    fn mode(&self) -> Option<f64>;
    /// Points at which [`sample_range`](Distribution::sample_range) evaluates
    /// the density.
    fn sample_points(&self) -> Vec<f64>;

    /// Mean, variance and mode together.
    fn statistics(&self) -> Statistics {
        Statistics {
            mean: self.mean(),
            variance: self.variance(),
            mode: self.mode(),
        }
    }

    /// Density evaluated over the family's plotting range.
    ///
    /// Recomputed from scratch on every call.
    fn sample_range(&self) -> SampleRange {
        SampleRange::tabulate(self.sample_points(), |x| self.density(x))
    }
}

/// Evaluation grid over `[min, max]`.
///
/// Discrete grids hold every integer in `⌈min⌉..=⌊max⌋` and ignore `step`.
/// Continuous grids start at `min` and accumulate `x += step` while
/// `x <= max`, so the last point may fall short of `max` by rounding.
///
/// Returns an empty grid for non-finite bounds, a non-positive step, a
/// span that would hold more than [`MAX_POINTS`] points, or bounds so
/// large that `x += step` would not move `x` (or, for discrete grids,
/// that consecutive integers are no longer representable).
///
/// ```
/// use distlab::stats::generate_range;
///
/// assert_eq!(generate_range(0.5, 3.5, 1.0, true), vec![1.0, 2.0, 3.0]);
/// assert_eq!(generate_range(0.0, 1.0, 0.25, false), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(generate_range(0.0, 1.0, 0.0, false).is_empty());
/// assert!(generate_range(1e17, 1e17 + 64.0, 0.1, false).is_empty());
/// assert!(generate_range(0.0, 1e20, 1.0, true).is_empty());
/// ```
pub fn generate_range(min: f64, max: f64, step: f64, discrete: bool) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if discrete {
        let (lo, hi) = (min.ceil(), max.floor());
        if lo > hi {
            return Vec::new();
        }
        if hi - lo >= MAX_POINTS as f64 || lo.abs().max(hi.abs()) > MAX_EXACT_INTEGER {
            return Vec::new();
        }
        let count = (hi - lo) as usize + 1;
        return (0..count).map(|i| lo + i as f64).collect();
    }
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    // |x| peaks at an endpoint, so checking both covers every point
    if min + step == min || max + step == max || (max - min) / step >= MAX_POINTS as f64 {
        return Vec::new();
    }
    let mut xs = Vec::new();
    let mut x = min;
    while x <= max {
        xs.push(x);
        x += step;
    }
    xs
}

/// Upper bound on the number of points [`generate_range`] will produce.
pub const MAX_POINTS: usize = 1 << 20;

/// 2^53: past this, adjacent integers are not distinct `f64` values.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Step used by the continuous families that plot on a fixed 0.1 grid.
pub(crate) const FIXED_STEP: f64 = 0.1;

/// Number of subdivisions used by the families whose step scales with the
/// plotting range (Gamma, Lognormal, Weibull).
pub(crate) const SUBDIVISIONS: f64 = 200.0;

/// Pass `v` through, or report it as non-finite under `symbol`.
pub(crate) fn finite(symbol: &'static str, v: f64) -> Result<f64, StatsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(StatsError::NonFiniteParameter(symbol))
    }
}

/// `true` for finite values with no fractional part.
#[inline]
pub(crate) fn is_integer(x: f64) -> bool {
    x.is_finite() && x == x.floor()
}
