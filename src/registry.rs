//! Registry of the fifteen distribution families.
//!
//! Each family is named by a [`DistributionId`] with a stable camelCase
//! string key (`"binomial"`, `"negativeBinomial"`, …) and described by a
//! `&'static` [`Descriptor`] carrying its display name, kind, description
//! and parameter metadata. The descriptor also evaluates the family from a
//! caller-supplied [`ParameterSet`], which is the entry point for callers that
//! hold parameters by key rather than as typed values.
//!
//! # Example
//!
//! ```
//! use distlab::registry;
//! use distlab::params::ParameterSet;
//!
//! let binomial = registry::get("binomial").unwrap();
//! let params = ParameterSet::from([("n", 20.0), ("p", 0.5)]);
//! let pmf = binomial.density(10.0, &params).unwrap();
//! assert!((pmf - 0.1762).abs() < 1e-4);
//!
//! let stats = binomial.statistics(&params).unwrap();
//! assert_eq!(stats.mean, 10.0);
//! ```

use core::fmt;
use core::str::FromStr;

use crate::params::{Parameter, ParameterSet};
use crate::stats::{self, Distribution, Kind, SampleRange, Statistics, StatsError, generate_range};

/// Declares every family once: the id variant, its string key, the module
/// holding its `DESCRIPTOR` and the implementing type.
macro_rules! families {
    ($($variant:ident => $key:literal, $module:ident :: $ty:ident;)*) => {
        /// Identifier of a distribution family.
        ///
        /// Parses from and displays as the family's camelCase key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        pub enum DistributionId {
            $($variant,)*
        }

        impl DistributionId {
            /// Every family, in registration order.
            pub const ALL: &'static [DistributionId] = &[$(DistributionId::$variant,)*];

            /// String key of the family, e.g. `"negativeBinomial"`.
            pub const fn key(self) -> &'static str {
                match self {
                    $(DistributionId::$variant => $key,)*
                }
            }

            /// Static metadata of the family.
            pub fn descriptor(self) -> &'static Descriptor {
                match self {
                    $(DistributionId::$variant => &stats::$module::DESCRIPTOR,)*
                }
            }

            /// Resolve and validate `params` into a typed family value.
            pub fn instantiate(self, params: &ParameterSet) -> Result<Family, StatsError> {
                match self {
                    $(DistributionId::$variant => stats::$ty::from_params(params).map(Family::$variant),)*
                }
            }
        }

        impl FromStr for DistributionId {
            type Err = StatsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(DistributionId::$variant),)*
                    _ => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(key = s, "unknown distribution key");
                        Err(StatsError::UnknownDistribution)
                    }
                }
            }
        }

        /// A validated distribution of any registered family.
        ///
        /// Dispatches the [`Distribution`] contract to the wrapped value.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Family {
            $($variant(stats::$ty),)*
        }

        impl Family {
            pub fn id(&self) -> DistributionId {
                match self {
                    $(Family::$variant(_) => DistributionId::$variant,)*
                }
            }
        }

        impl Distribution for Family {
            fn kind(&self) -> Kind {
                match self {
                    $(Family::$variant(d) => d.kind(),)*
                }
            }

            fn density(&self, x: f64) -> f64 {
                match self {
                    $(Family::$variant(d) => d.density(x),)*
                }
            }

            fn mean(&self) -> f64 {
                match self {
                    $(Family::$variant(d) => d.mean(),)*
                }
            }

            fn variance(&self) -> f64 {
                match self {
                    $(Family::$variant(d) => d.variance(),)*
                }
            }

            fn mode(&self) -> Option<f64> {
                match self {
                    $(Family::$variant(d) => d.mode(),)*
                }
            }

            fn sample_points(&self) -> Vec<f64> {
                match self {
                    $(Family::$variant(d) => d.sample_points(),)*
                }
            }
        }

        $(
            impl From<stats::$ty> for Family {
                fn from(d: stats::$ty) -> Self {
                    Family::$variant(d)
                }
            }
        )*
    };
}

families! {
    Binomial => "binomial", binomial::Binomial;
    UniformDiscrete => "uniformDiscrete", uniform_discrete::UniformDiscrete;
    Geometric => "geometric", geometric::Geometric;
    NegativeBinomial => "negativeBinomial", negative_binomial::NegativeBinomial;
    Hypergeometric => "hypergeometric", hypergeometric::Hypergeometric;
    Normal => "normal", normal::Normal;
    Uniform => "uniform", uniform::Uniform;
    Triangular => "triangular", triangular::Triangular;
    Logistic => "logistic", logistic::Logistic;
    Cauchy => "cauchy", cauchy::Cauchy;
    Exponential => "exponential", exponential::Exponential;
    Lognormal => "lognormal", lognormal::Lognormal;
    Gamma => "gamma", gamma_dist::Gamma;
    Weibull => "weibull", weibull::Weibull;
    MinimumExtreme => "minimumExtreme", minimum_extreme::MinimumExtreme;
}

impl fmt::Display for DistributionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Static metadata for one distribution family.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Descriptor {
    pub id: DistributionId,
    /// Display name, e.g. `"Negative Binomial"`.
    pub name: &'static str,
    pub kind: Kind,
    /// One-line guidance on when the family fits.
    pub description: &'static str,
    /// Parameters in display order.
    pub parameters: &'static [Parameter],
}

impl Descriptor {
    /// Parameter set holding every parameter's default, keyed by symbol.
    pub fn default_parameters(&self) -> ParameterSet {
        self.parameters.iter().map(|p| (p.symbol, p.default)).collect()
    }

    /// Metadata for the parameter with canonical `symbol`.
    pub fn parameter(&self, symbol: &str) -> Option<&'static Parameter> {
        self.parameters.iter().find(|p| p.symbol == symbol)
    }

    /// Resolve `params` into a validated family value.
    pub fn instantiate(&self, params: &ParameterSet) -> Result<Family, StatsError> {
        let result = self.id.instantiate(params);
        #[cfg(feature = "tracing")]
        if let Err(ref err) = result {
            tracing::debug!(distribution = self.id.key(), %err, "rejected parameter set");
        }
        result
    }

    /// Probability mass or density at `x`.
    pub fn density(&self, x: f64, params: &ParameterSet) -> Result<f64, StatsError> {
        Ok(self.instantiate(params)?.density(x))
    }

    /// Mean, variance and mode.
    pub fn statistics(&self, params: &ParameterSet) -> Result<Statistics, StatsError> {
        Ok(self.instantiate(params)?.statistics())
    }

    /// Density over the family's plotting range.
    pub fn sample_range(&self, params: &ParameterSet) -> Result<SampleRange, StatsError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("sample_range", distribution = self.id.key()).entered();
        Ok(self.instantiate(params)?.sample_range())
    }

    /// Density over a caller-chosen `[min, max]` grid.
    ///
    /// Discrete families enumerate the integers in the interval and ignore
    /// `step`.
    ///
    /// ```
    /// use distlab::registry;
    /// use distlab::params::ParameterSet;
    ///
    /// let normal = registry::get("normal").unwrap();
    /// let sample = normal.sample_over(&ParameterSet::new(), -1.0, 1.0, 0.5).unwrap();
    /// assert_eq!(sample.xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    /// ```
    pub fn sample_over(
        &self,
        params: &ParameterSet,
        min: f64,
        max: f64,
        step: f64,
    ) -> Result<SampleRange, StatsError> {
        let family = self.instantiate(params)?;
        let xs = generate_range(min, max, step, self.kind == Kind::Discrete);
        Ok(SampleRange::tabulate(xs, |x| family.density(x)))
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Look up a family by its string key.
///
/// ```
/// use distlab::registry;
///
/// assert_eq!(registry::get("minimumExtreme").unwrap().name, "Minimum Extreme (Gumbel Min)");
/// assert!(registry::get("poisson").is_none());
/// ```
pub fn get(key: &str) -> Option<&'static Descriptor> {
    key.parse::<DistributionId>().ok().map(DistributionId::descriptor)
}

/// All descriptors in registration order (discrete families first).
pub fn iter() -> impl Iterator<Item = &'static Descriptor> {
    DistributionId::ALL.iter().map(|id| id.descriptor())
}

/// Descriptors of one kind, in registration order.
pub fn by_kind(kind: Kind) -> impl Iterator<Item = &'static Descriptor> {
    iter().filter(move |d| d.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for &id in DistributionId::ALL {
            assert_eq!(id.key().parse::<DistributionId>(), Ok(id));
            assert_eq!(id.to_string(), id.key());
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn unknown_key() {
        assert_eq!("poisson".parse::<DistributionId>(), Err(StatsError::UnknownDistribution));
        // Keys are case-sensitive
        assert!(get("Normal").is_none());
        assert!(get("").is_none());
    }

    #[test]
    fn registration_order() {
        let keys: Vec<_> = iter().map(|d| d.id.key()).collect();
        assert_eq!(
            keys,
            [
                "binomial",
                "uniformDiscrete",
                "geometric",
                "negativeBinomial",
                "hypergeometric",
                "normal",
                "uniform",
                "triangular",
                "logistic",
                "cauchy",
                "exponential",
                "lognormal",
                "gamma",
                "weibull",
                "minimumExtreme",
            ]
        );
    }

    #[test]
    fn five_discrete_ten_continuous() {
        assert_eq!(by_kind(Kind::Discrete).count(), 5);
        assert_eq!(by_kind(Kind::Continuous).count(), 10);
        assert!(by_kind(Kind::Discrete).all(|d| d.id.instantiate(&d.default_parameters()).is_ok()));
    }

    #[test]
    fn defaults_instantiate_and_match_kind() {
        for d in iter() {
            let family = d.instantiate(&d.default_parameters()).unwrap();
            assert_eq!(family.kind(), d.kind, "{}", d.name);
            assert_eq!(family.id(), d.id);
        }
    }

    #[test]
    fn defaults_within_bounds() {
        for d in iter() {
            for p in d.parameters {
                assert!(p.min <= p.default && p.default <= p.max, "{} {}", d.name, p.symbol);
                assert!(p.step > 0.0);
            }
        }
    }

    #[test]
    fn parameter_lookup() {
        let gamma = DistributionId::Gamma.descriptor();
        assert_eq!(gamma.parameter("α").map(|p| p.name), Some("Shape"));
        assert!(gamma.parameter("alpha").is_none());
    }

    #[test]
    fn descriptor_display() {
        assert_eq!(DistributionId::Cauchy.descriptor().to_string(), "Cauchy (continuous)");
    }

    #[test]
    fn rejects_invalid_parameter_set() {
        let normal = DistributionId::Normal.descriptor();
        let params = ParameterSet::from([("σ", -1.0)]);
        assert_eq!(normal.density(0.0, &params), Err(StatsError::InvalidParameter("σ")));

        let uniform = DistributionId::Uniform.descriptor();
        assert_eq!(
            uniform.statistics(&ParameterSet::from([("a", 0.0)])),
            Err(StatsError::MissingParameter("b"))
        );
    }

    #[test]
    fn sample_over_discrete_ignores_step() {
        let binomial = DistributionId::Binomial.descriptor();
        let sample = binomial
            .sample_over(&binomial.default_parameters(), 2.5, 5.0, 0.1)
            .unwrap();
        assert_eq!(sample.xs, vec![3.0, 4.0, 5.0]);
        assert!(sample.ys.iter().all(|&y| y > 0.0));
    }

    #[test]
    fn family_from_typed_value() {
        let family: Family = stats::Exponential::new(2.0).unwrap().into();
        assert_eq!(family.id(), DistributionId::Exponential);
        assert_eq!(family.mean(), 0.5);
    }
}
