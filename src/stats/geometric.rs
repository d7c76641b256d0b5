use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, finite, generate_range, is_integer};

pub(crate) static PARAMETERS: [Parameter; 1] = [
    Parameter::new("p", "Probability of success", "Probability of success in each trial", 0.01, 0.99, 0.01, 0.3),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Geometric,
    name: "Geometric",
    kind: Kind::Discrete,
    description: "Models the number of failures before the first success in a sequence of \
                  independent trials.",
    parameters: &PARAMETERS,
};

/// Geometric distribution counting failures before the first success.
///
/// P(X = k) = p (1−p)^k for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Geometric};
///
/// let g = Geometric::new(0.5).unwrap();
/// assert_eq!(g.density(0.0), 0.5);
/// assert_eq!(g.density(2.0), 0.125);
/// assert_eq!(g.mean(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Create a geometric distribution. Requires `0 < p ≤ 1`.
    pub fn new(p: f64) -> Result<Self, StatsError> {
        let p = finite("p", p)?;
        if p <= 0.0 || p > 1.0 {
            return Err(StatsError::InvalidParameter("p"));
        }
        Ok(Self { p })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?)
    }
}

impl Distribution for Geometric {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: f64) -> f64 {
        if !is_integer(x) || x < 0.0 {
            return 0.0;
        }
        self.p * (1.0 - self.p).powf(x)
    }

    fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }

    fn mode(&self) -> Option<f64> {
        Some(0.0)
    }

    /// `0..=min(100, ⌈10/p⌉)`, where the remaining mass is negligible.
    fn sample_points(&self) -> Vec<f64> {
        let max_x = (10.0 / self.p).ceil().min(100.0);
        generate_range(0.0, max_x, 1.0, true)
    }
}
