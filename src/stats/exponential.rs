use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use super::{Distribution, Kind, StatsError, FIXED_STEP, finite, generate_range};

pub(crate) static PARAMETERS: [Parameter; 1] = [
    Parameter::new("λ", "Rate", "Rate parameter (events per unit time)", 0.1, 5.0, 0.1, 1.0)
        .aliases(&["lambda", "rate"])
        .fallback(1.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Exponential,
    name: "Exponential",
    kind: Kind::Continuous,
    description: "Models time until an event occurs. Only positive values, right-skewed with \
                  outliers only positive.",
    parameters: &PARAMETERS,
};

/// Exponential distribution with rate λ.
///
/// f(x) = λ e^{−λx} for x ≥ 0.
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Exponential};
///
/// let e = Exponential::new(2.0).unwrap();
/// assert_eq!(e.mean(), 0.5);
/// assert_eq!(e.variance(), 0.25);
/// assert_eq!(e.density(-1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Create an exponential distribution with rate `lambda > 0`.
    pub fn new(lambda: f64) -> Result<Self, StatsError> {
        let lambda = finite("λ", lambda)?;
        if lambda <= 0.0 {
            return Err(StatsError::InvalidParameter("λ"));
        }
        Ok(Self { lambda })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(PARAMETERS[0].resolve(params)?)
    }
}

impl Distribution for Exponential {
    fn kind(&self) -> Kind {
        Kind::Continuous
    }

    fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.lambda * (-self.lambda * x).exp()
    }

    fn mean(&self) -> f64 {
        1.0 / self.lambda
    }

    fn variance(&self) -> f64 {
        1.0 / (self.lambda * self.lambda)
    }

    fn mode(&self) -> Option<f64> {
        Some(0.0)
    }

    /// `[0, 5/λ]` on a 0.1 grid.
    fn sample_points(&self) -> Vec<f64> {
        generate_range(0.0, 5.0 / self.lambda, FIXED_STEP, false)
    }
}
