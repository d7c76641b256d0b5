use core::f64::consts::PI;

use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("x₀", "Location", "Location parameter", -10.0, 10.0, 0.1, 0.0)
        .aliases(&["x0", "location"])
        .fallback(0.0),
    Parameter::new("γ", "Scale", "Scale parameter", 0.1, 5.0, 0.1, 1.0)
        .aliases(&["gamma", "scale"])
        .fallback(1.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Cauchy,
    name: "Cauchy",
    kind: Kind::Continuous,
    description: "Heavy-tailed distribution, similar to Logistic but even heavier tails. \
                  Outliers are low probability but possible.",
    parameters: &PARAMETERS,
};

/// Cauchy distribution with location x₀ and scale γ.
///
/// Mean and variance do not exist and are reported as NaN.
///
/// # Example
///
/// ```
/// use distlab::stats::{Cauchy, Distribution};
///
/// let c = Cauchy::new(0.0, 1.0).unwrap();
/// assert!((c.density(0.0) - 1.0 / std::f64::consts::PI).abs() < 1e-15);
/// assert!(c.mean().is_nan());
/// assert_eq!(c.mode(), Some(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    x0: f64,
    gamma: f64,
}

impl Cauchy {
    /// Create a Cauchy distribution. Requires `gamma > 0`.
    pub fn new(x0: f64, gamma: f64) -> Result<Self, StatsError> {
        let x0 = finite("x₀", x0)?;
        let gamma = finite("γ", gamma)?;
        if gamma <= 0.0 {
            return Err(StatsError::InvalidParameter("γ"));
        }
        Ok(Self { x0, gamma })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for Cauchy {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        let d = x - self.x0;
        1.0 / (PI * self.gamma * (1.0 + d * d / (self.gamma * self.gamma)))
    }

    fn mean(&self) -> f64 {
        f64::NAN
    }

    fn variance(&self) -> f64 {
        f64::NAN
    }

    fn mode(&self) -> Option<f64> {
        Some(self.x0)
    }

    /// x₀ ± 5γ on a 0.1 grid.
    fn sample_points(&self) -> Vec<f64> {
        let half = 5.0 * self.gamma;
        generate_range(self.x0 - half, self.x0 + half, FIXED_STEP, false)
    }
}
