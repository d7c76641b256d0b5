use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use crate::special::{binomial_coefficient, ln_binomial_coefficient};
use super::{Distribution, Kind, StatsError, finite, generate_range, is_integer};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("n", "Number of trials", "Total number of independent trials", 1.0, 100.0, 1.0, 20.0),
    Parameter::new("p", "Probability of success", "Probability of success in each trial", 0.01, 0.99, 0.01, 0.5),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Binomial,
    name: "Binomial",
    kind: Kind::Discrete,
    description: "Models the number of successes in a fixed number of independent trials, \
                  each with the same probability of success.",
    parameters: &PARAMETERS,
};

/// Binomial distribution B(n, p).
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n.
///
/// # Example
///
/// ```
/// use distlab::stats::{Binomial, Distribution};
///
/// let b = Binomial::new(20.0, 0.5).unwrap();
/// assert!((b.density(10.0) - 0.1761970520019531).abs() < 1e-12);
/// assert!((b.mean() - 10.0).abs() < 1e-14);
/// assert!((b.variance() - 5.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: f64,
    p: f64,
}

impl Binomial {
    /// Create a binomial distribution with `n` trials and success probability `p`.
    /// Requires `n` to be a non-negative integer and `0 ≤ p ≤ 1`.
    pub fn new(n: f64, p: f64) -> Result<Self, StatsError> {
        let n = finite("n", n)?;
        let p = finite("p", p)?;
        if n < 0.0 || !is_integer(n) {
            return Err(StatsError::InvalidParameter("n"));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidParameter("p"));
        }
        Ok(Self { n, p })
    }

    /// Resolve `n` and `p` from a parameter set.
    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for Binomial {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: f64) -> f64 {
        if !is_integer(x) || x < 0.0 || x > self.n {
            return 0.0;
        }
        let coeff = binomial_coefficient(self.n, x);
        if coeff.is_finite() {
            return coeff * self.p.powf(x) * (1.0 - self.p).powf(self.n - x);
        }
        // C(n, x) overflowed; p^x may have underflowed to 0
        let ln_coeff = ln_binomial_coefficient(self.n, x);
        (ln_coeff + x * self.p.ln() + (self.n - x) * (1.0 - self.p).ln()).exp()
    }

    fn mean(&self) -> f64 {
        self.n * self.p
    }

    fn variance(&self) -> f64 {
        self.n * self.p * (1.0 - self.p)
    }

    fn mode(&self) -> Option<f64> {
        Some(((self.n + 1.0) * self.p).floor())
    }

    fn sample_points(&self) -> Vec<f64> {
        generate_range(0.0, self.n, 1.0, true)
    }
}
