use crate::params::{Parameter, ParameterSet};
use crate::registry::{Descriptor, DistributionId};
use crate::special::{binomial_coefficient, ln_binomial_coefficient};
use super::{Distribution, Kind, StatsError, finite, generate_range, is_integer};

pub(crate) static PARAMETERS: [Parameter; 3] = [
    Parameter::new("N", "Population size", "Total population size", 10.0, 200.0, 1.0, 100.0),
    Parameter::new(
        "K",
        "Number of successes in population",
        "Number of success items in population",
        1.0,
        100.0,
        1.0,
        30.0,
    ),
    Parameter::new("n", "Sample size", "Number of items drawn", 1.0, 100.0, 1.0, 20.0),
];

pub(crate) static DESCRIPTOR: Descriptor = Descriptor {
    id: DistributionId::Hypergeometric,
    name: "Hypergeometric",
    kind: Kind::Discrete,
    description: "Models the number of successes in draws without replacement from a finite \
                  population.",
    parameters: &PARAMETERS,
};

/// Hypergeometric distribution: successes in `n` draws without replacement
/// from a population of `N` items, `K` of which are successes.
///
/// P(X = k) = C(K,k) C(N−K,n−k) / C(N,n) for
/// max(0, n−(N−K)) ≤ k ≤ min(n, K).
///
/// All three parameters are floored to integers on construction.
///
/// # Example
///
/// ```
/// use distlab::stats::{Distribution, Hypergeometric};
///
/// let h = Hypergeometric::new(100.0, 30.0, 20.0).unwrap();
/// assert!((h.mean() - 6.0).abs() < 1e-14);
/// assert_eq!(h.density(21.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypergeometric {
    population: f64, // N
    successes: f64,  // K
    draws: f64,      // n
}

impl Hypergeometric {
    /// Create a hypergeometric distribution.
    /// Requires `N ≥ 1`, `0 ≤ K ≤ N` and `0 ≤ n ≤ N` after flooring.
    pub fn new(population: f64, successes: f64, draws: f64) -> Result<Self, StatsError> {
        let population = finite("N", population)?.floor();
        let successes = finite("K", successes)?.floor();
        let draws = finite("n", draws)?.floor();
        if population < 1.0 {
            return Err(StatsError::InvalidParameter("N"));
        }
        if successes < 0.0 || successes > population {
            return Err(StatsError::InvalidParameter("K"));
        }
        if draws < 0.0 || draws > population {
            return Err(StatsError::InvalidParameter("n"));
        }
        Ok(Self { population, successes, draws })
    }

    pub fn from_params(params: &ParameterSet) -> Result<Self, StatsError> {
        Self::new(
            PARAMETERS[0].resolve(params)?,
            PARAMETERS[1].resolve(params)?,
            PARAMETERS[2].resolve(params)?,
        )
    }

    /// Smallest value with non-zero mass, max(0, n − (N − K)).
    pub fn support_min(&self) -> f64 {
        (self.draws - (self.population - self.successes)).max(0.0)
    }

    /// Largest value with non-zero mass, min(n, K).
    pub fn support_max(&self) -> f64 {
        self.draws.min(self.successes)
    }
}

impl Distribution for Hypergeometric {
    fn kind(&self) -> Kind {
        Kind::Discrete
    }

    fn density(&self, x: f64) -> f64 {
        let (big_n, k, n) = (self.population, self.successes, self.draws);
        if !is_integer(x) || x < 0.0 || x > n || x > k {
            return 0.0;
        }
        if n - x > big_n - k {
            return 0.0;
        }
        let numerator = binomial_coefficient(k, x) * binomial_coefficient(big_n - k, n - x);
        let denominator = binomial_coefficient(big_n, n);
        if numerator.is_finite() && denominator.is_finite() {
            return numerator / denominator;
        }
        (ln_binomial_coefficient(k, x) + ln_binomial_coefficient(big_n - k, n - x)
            - ln_binomial_coefficient(big_n, n))
        .exp()
    }

    fn mean(&self) -> f64 {
        self.draws * self.successes / self.population
    }

    fn variance(&self) -> f64 {
        let (big_n, k, n) = (self.population, self.successes, self.draws);
        (n * k * (big_n - k) * (big_n - n)) / (big_n * big_n * (big_n - 1.0))
    }

    fn mode(&self) -> Option<f64> {
        let (big_n, k, n) = (self.population, self.successes, self.draws);
        Some(((n + 1.0) * (k + 1.0) / (big_n + 2.0)).floor())
    }

    fn sample_points(&self) -> Vec<f64> {
        generate_range(self.support_min(), self.support_max(), 1.0, true)
    }
}
