use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use crate::special::{binomial_coefficient, ln_binomial_coefficient};
use super::{Distribution, Kind, StatsError, finite, generate_range, is_integer};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("r", "Number of successes", "Target number of successes", 1.0, 20.0, 1.0, 3.0),
    Parameter::new("p", "Probability of success", "Probability of success in each trial", 0.01, 0.99, 0.01, 0.4),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::NegativeBinomial,
    name: "Negative Binomial",
    kind: Kind::Discrete,
    description: "Models the number of failures before achieving r successes in a sequence of \
                  independent trials.",
    parameters: &PARAMETERS,
};

/// Negative binomial distribution: failures before the `r`-th success.
///
/// P(X = k) = C(k+r−1, r−1) p^r (1−p)^k for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, NegativeBinomial};
///
/// let nb = NegativeBinomial::new(3.0, 0.4).unwrap();
/// assert!((nb.mean() - 4.5).abs() < 1e-12);
/// assert!((nb.density(0.0) - 0.064).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    r: f64,
    p: f64,
}

impl NegativeBinomial {
    /// Create a negative binomial distribution.
    /// Requires `r` to be a positive integer and `0 < p ≤ 1`.
    pub fn new(r: f64, p: f64) -> Result<Self, StatsError> {
        let r = finite("r", r)?;
        let p = finite("p", p)?;
        if r < 1.0 || !is_integer(r) {
            return Err(StatsError::InvalidParameter("r"));
        }
        if p <= 0.0 || p > 1.0 {
            return Err(StatsError::InvalidParameter("p"));
        }
        Ok(Self { r, p })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for NegativeBinomial {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: f64) -> f64 {
        if !is_integer(x) || x < 0.0 {
            return 0.0;
        }
        let coeff = binomial_coefficient(x + self.r - 1.0, self.r - 1.0);
        if coeff.is_finite() {
            return coeff * self.p.powf(self.r) * (1.0 - self.p).powf(x);
        }
        let ln_coeff = ln_binomial_coefficient(x + self.r - 1.0, self.r - 1.0);
        (ln_coeff + self.r * self.p.ln() + x * (1.0 - self.p).ln()).exp()
    }

    fn mean(&self) -> f64 {
        self.r * (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        self.r * (1.0 - self.p) / (self.p * self.p)
    }

    fn mode(&self) -> Option<f64> {
        let mode = ((self.r - 1.0) * (1.0 - self.p) / self.p).floor();
        Some(mode.max(0.0))
    }

    /// `0..=min(100, ⌈10r/p⌉)`.
    fn sample_points(&self) -> Vec<f64> {
        let max_x = (self.r * 10.0 / self.p).ceil().min(100.0);
        generate_range(0.0, max_x, 1.0, true)
    }
}
