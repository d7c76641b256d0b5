use core::f64::consts::TAU;

use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, SUBDIVISIONS, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("μ", "Location", "Mean of the underlying normal distribution", -2.0, 2.0, 0.1, 0.0)
        .aliases(&["mu", "mean"])
        .fallback(0.0),
    Parameter::new(
        "σ",
        "Scale",
        "Standard deviation of the underlying normal distribution",
        0.1,
        2.0,
        0.1,
        1.0,
    )
    .aliases(&["sigma", "stdDev"])
    .fallback(1.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Lognormal,
    name: "Lognormal",
    kind: Kind::Continuous,
    description: "The logarithm of the variable follows a normal distribution. Right-skewed, \
                  only positive values, mostly positive with some very large outliers.",
    parameters: &PARAMETERS,
};

/// Lognormal distribution: ln X ~ N(μ, σ²).
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Lognormal};
///
/// let l = Lognormal::new(0.0, 1.0).unwrap();
/// assert!((l.mean() - 0.5_f64.exp()).abs() < 1e-14);
/// assert!((l.mode().unwrap() - (-1.0_f64).exp()).abs() < 1e-14);
/// assert_eq!(l.density(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lognormal {
    mu: f64,
    sigma: f64,
}

impl Lognormal {
    /// Create a lognormal distribution. Requires `sigma > 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, StatsError> {
        let mu = finite("μ", mu)?;
        let sigma = finite("σ", sigma)?;
        if sigma <= 0.0 {
            return Err(StatsError::InvalidParameter("σ"));
        }
        Ok(Self { mu, sigma })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for Lognormal {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let coefficient = 1.0 / (x * self.sigma * TAU.sqrt());
        let d = x.ln() - self.mu;
        coefficient * (-(d * d) / (2.0 * self.sigma * self.sigma)).exp()
    }

    fn mean(&self) -> f64 {
        (self.mu + self.sigma * self.sigma / 2.0).exp()
    }

    fn variance(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        (s2.exp() - 1.0) * (2.0 * self.mu + s2).exp()
    }

    fn mode(&self) -> Option<f64> {
        Some((self.mu - self.sigma * self.sigma).exp())
    }

    /// From 0.01 up to e^{μ+4σ} in 200 steps.
    fn sample_points(&self) -> Vec<f64> {
        let max_x = (self.mu + 4.0 * self.sigma).exp();
        generate_range(0.01, max_x, max_x / SUBDIVISIONS, false)
    }
}
