use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, finite, generate_range, is_integer};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("a", "Minimum", "Minimum value", 0.0, 50.0, 1.0, 1.0),
    Parameter::new("b", "Maximum", "Maximum value", 1.0, 100.0, 1.0, 10.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::UniformDiscrete,
    name: "Uniform Discrete",
    kind: Kind::Discrete,
    description: "All outcomes have equal probability. Used when there is no preference for \
                  any particular outcome.",
    parameters: &PARAMETERS,
};

/// Discrete uniform distribution on the integers {a, …, b}.
///
/// Bounds are floored to integers on construction.
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, UniformDiscrete};
///
/// let u = UniformDiscrete::new(1.0, 10.0).unwrap();
/// assert_eq!(u.density(5.0), 0.1);
/// assert_eq!(u.density(11.0), 0.0);
/// assert_eq!(u.mode(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformDiscrete {
    a: f64,
    b: f64,
}

impl UniformDiscrete {
    /// Create a discrete uniform distribution on {⌊a⌋, …, ⌊b⌋}. Requires `a ≤ b`.
    pub fn new(a: f64, b: f64) -> Result<Self, StatsError> {
        let a = finite("a", a)?.floor();
        let b = finite("b", b)?.floor();
        if b < a {
            return Err(StatsError::InvalidParameter("b"));
        }
        Ok(Self { a, b })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }

    /// Number of outcomes b − a + 1.
    fn outcomes(&self) -> f64 {
        self.b - self.a + 1.0
    }
}

impl Distribution for UniformDiscrete {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: f64) -> f64 {
        if !is_integer(x) || x < self.a || x > self.b {
            return 0.0;
        }
        1.0 / self.outcomes()
    }

    fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    fn variance(&self) -> f64 {
        let n = self.outcomes();
        (n * n - 1.0) / 12.0
    }

    fn mode(&self) -> Option<f64> {
        None
    }

    fn sample_points(&self) -> Vec<f64> {
        generate_range(self.a, self.b, 1.0, true)
    }
}
