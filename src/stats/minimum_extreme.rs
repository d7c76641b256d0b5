use core::f64::consts::PI;

use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use crate::special::EULER_MASCHERONI;
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("μ", "Location", "Location parameter", -10.0, 10.0, 0.1, 0.0)
        .aliases(&["mu", "location"])
        .fallback(0.0),
    Parameter::new("β", "Scale", "Scale parameter", 0.1, 5.0, 0.1, 1.0)
        .aliases(&["beta", "scale"])
        .fallback(1.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::MinimumExtreme,
    name: "Minimum Extreme (Gumbel Min)",
    kind: Kind::Continuous,
    description: "Models the minimum of many random variables. Left-skewed, with outliers \
                  mostly negative.",
    parameters: &PARAMETERS,
};

/// Minimum extreme value (Gumbel minimum) distribution.
///
/// f(x) = (1/β) e^{z} e^{−e^{z}}, z = (x − μ)/β.
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, MinimumExtreme};
///
/// let g = MinimumExtreme::new(0.0, 1.0).unwrap();
/// assert!((g.density(0.0) - (-1.0_f64).exp()).abs() < 1e-15);
/// assert!((g.mean() + 0.5772156649015329).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumExtreme {
    mu: f64,
    beta: f64,
}

impl MinimumExtreme {
    /// Create a Gumbel-min distribution. Requires `beta > 0`.
    pub fn new(mu: f64, beta: f64) -> Result<Self, StatsError> {
        let mu = finite("μ", mu)?;
        let beta = finite("β", beta)?;
        if beta <= 0.0 {
            return Err(StatsError::InvalidParameter("β"));
        }
        Ok(Self { mu, beta })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for MinimumExtreme {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        let e = ((x - self.mu) / self.beta).exp();
        // e·exp(−e) → 0 as e → ∞, but ∞·0 is NaN
        if e.is_infinite() {
            return 0.0;
        }
        e * (-e).exp() / self.beta
    }

    fn mean(&self) -> f64 {
        self.mu - self.beta * EULER_MASCHERONI
    }

    fn variance(&self) -> f64 {
        PI * PI * self.beta * self.beta / 6.0
    }

    fn mode(&self) -> Option<f64> {
        Some(self.mu)
    }

    /// μ ± 5β on a 0.1 grid.
    fn sample_points(&self) -> Vec<f64> {
        let half = 5.0 * self.beta;
        generate_range(self.mu - half, self.mu + half, FIXED_STEP, false)
    }
}
