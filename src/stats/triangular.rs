use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 3] = [
    Parameter::new("a", "Minimum", "Lower bound", -10.0, 10.0, 0.1, 0.0),
    Parameter::new("b", "Maximum", "Upper bound", -10.0, 10.0, 0.1, 10.0),
    Parameter::new("c", "Mode", "Peak of the triangle (between a and b)", -10.0, 10.0, 0.1, 5.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Triangular,
    name: "Triangular",
    kind: Kind::Continuous,
    description: "Triangular-shaped distribution with limits on data and no outliers. \
                  Clustered around a central value.",
    parameters: &PARAMETERS,
};

/// Triangular distribution on [a, b] with peak at c.
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Triangular};
///
/// let t = Triangular::new(0.0, 10.0, 5.0).unwrap();
/// assert_eq!(t.density(5.0), 0.2);
/// assert!((t.density(2.5) - 0.1).abs() < 1e-15);
/// assert_eq!(t.mode(), Some(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Create a triangular distribution. Requires `a < b` and `a ≤ c ≤ b`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, StatsError> {
        let a = finite("a", a)?;
        let b = finite("b", b)?;
        let c = finite("c", c)?;
        if a >= b {
            return Err(StatsError::InvalidParameter("b"));
        }
        if c < a || c > b {
            return Err(StatsError::InvalidParameter("c"));
        }
        Ok(Self { a, b, c })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(
            PARAMETERS[0].resolve(params)?,
            PARAMETERS[1].resolve(params)?,
            PARAMETERS[2].resolve(params)?,
        )
    }
}

impl Distribution for Triangular {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        if x < a || x > b {
            0.0
        } else if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else if x == c {
            2.0 / (b - a)
        } else {
            2.0 * (b - x) / ((b - a) * (b - c))
        }
    }

    fn mean(&self) -> f64 {
        (self.a + self.b + self.c) / 3.0
    }

    fn variance(&self) -> f64 {
        let (a, b, c) = (self.a, self.b, self.c);
        (a * a + b * b + c * c - a * b - a * c - b * c) / 18.0
    }

    fn mode(&self) -> Option<f64> {
        Some(self.c)
    }

    fn sample_points(&self) -> Vec<f64> {
        generate_range(self.a, self.b, FIXED_STEP, false)
    }
}
