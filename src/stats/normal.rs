use core::f64::consts::TAU;

use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("μ", "Mean", "Center of the distribution", -10.0, 10.0, 0.1, 0.0)
        .aliases(&["mu", "mean"])
        .fallback(0.0),
    Parameter::new("σ", "Standard deviation", "Spread of the distribution", 0.1, 5.0, 0.1, 1.0)
        .aliases(&["sigma", "stdDev"])
        .fallback(1.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Normal,
    name: "Normal",
    kind: Kind::Continuous,
    description: "The classic bell curve. Used when data is symmetric, clustered around a \
                  central value, with outliers very unlikely.",
    parameters: &PARAMETERS,
};

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Normal};
///
/// let n = Normal::new(0.0, 1.0).unwrap();
/// assert!((n.density(0.0) - 0.3989422804014327).abs() < 1e-12);
/// assert_eq!(n.variance(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Create a normal distribution with mean `mu` and standard deviation `sigma`.
    ///
    /// Requires `sigma > 0`.
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

impl Distribution for Normal {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        let variance = self.sigma * self.sigma;
        let coefficient = 1.0 / (self.sigma * TAU.sqrt());
        let d = x - self.mu;
        coefficient * (-(d * d) / (2.0 * variance)).exp()
    }

    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn mode(&self) -> Option<f64> {
        Some(self.mu)
    }

    /// μ ± 4σ on a 0.1 grid.
    fn sample_points(&self) -> Vec<f64> {
        let half = 4.0 * self.sigma;
        generate_range(self.mu - half, self.mu + half, FIXED_STEP, false)
    }
}
