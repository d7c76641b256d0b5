use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 2] = [
    Parameter::new("a", "Minimum", "Lower bound", -10.0, 10.0, 0.1, 0.0),
    Parameter::new("b", "Maximum", "Upper bound", -10.0, 10.0, 0.1, 10.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Uniform,
    name: "Uniform",
    kind: Kind::Continuous,
    description: "All values in a range have equal probability density. Used when there is no \
                  preference for any particular value.",
    parameters: &PARAMETERS,
};

/// Continuous uniform distribution on [a, b].
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Uniform};
///
/// let u = Uniform::new(0.0, 10.0).unwrap();
/// assert_eq!(u.density(3.0), 0.1);
/// assert_eq!(u.density(-0.5), 0.0);
/// assert_eq!(u.mean(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    /// Create a uniform distribution on [a, b]. Requires `a < b`.
    pub fn new(a: f64, b: f64) -> Result<Self, StatsError> {
        let a = finite("a", a)?;
        let b = finite("b", b)?;
        if a >= b {
            return Err(StatsError::InvalidParameter("b"));
        }
        Ok(Self { a, b })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?, PARAMETERS[1].resolve(params)?)
    }
}

impl Distribution for Uniform {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        1.0 / (self.b - self.a)
    }

    fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    fn variance(&self) -> f64 {
        let w = self.b - self.a;
        w * w / 12.0
    }

    fn mode(&self) -> Option<f64> {
        None
    }

    fn sample_points(&self) -> Vec<f64> {
        generate_range(self.a, self.b, FIXED_STEP, false)
    }
}
