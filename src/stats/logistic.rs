use core::f64::consts::PI;

use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("μ", "Location", "Center of the distribution", -10.0, 10.0, 0.1, 0.0)
        .aliases(&["mu", "mean"])
        .fallback(0.0),
    Parameter::new("s", "Scale", "Scale parameter (related to variance)", 0.1, 5.0, 0.1, 1.0)
        .aliases(&["scale"])
        .fallback(1.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Logistic,
    name: "Logistic",
    kind: Kind::Continuous,
    description: "Similar to Normal but with heavier tails. Used when outliers are low \
                  probability but more likely than Normal.",
    parameters: &PARAMETERS,
};

/// Logistic distribution with location μ and scale s.
///
/// f(x) = e^{−z} / (s (1 + e^{−z})²), z = (x − μ)/s.
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Logistic};
///
/// let l = Logistic::new(0.0, 1.0).unwrap();
/// assert_eq!(l.density(0.0), 0.25);
/// assert!((l.variance() - std::f64::consts::PI.powi(2) / 3.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    mu: f64,
    s: f64,
}

impl Logistic {
    /// Create a logistic distribution. Requires `s > 0`.
    pub fn new(mu: f64, s: f64) -> Result<Self, StatsError> {
        let mu = finite("μ", mu)?;
        let s = finite("s", s)?;
        if s <= 0.0 {
            return Err(StatsError::InvalidParameter("s"));
        }
        Ok(Self { mu, s })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for Logistic {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        // Symmetric in z; evaluating at |z| keeps e^{-z} from overflowing.
        let z = ((x - self.mu) / self.s).abs();
        let e = (-z).exp();
        e / (self.s * (1.0 + e) * (1.0 + e))
    }

    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        PI * PI * self.s * self.s / 3.0
    }

    fn mode(&self) -> Option<f64> {
        Some(self.mu)
    }

    /// μ ± 5s on a 0.1 grid.
    fn sample_points(&self) -> Vec<f64> {
        let half = 5.0 * self.s;
        generate_range(self.mu - half, self.mu + half, FIXED_STEP, false)
    }
}
