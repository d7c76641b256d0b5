//! # distlab
//!
//! Probability distribution engine. Given a distribution family and a set of
//! parameters, computes the probability density (or mass) at a point, the
//! closed-form summary statistics, and a discretized sample for plotting.
//!
//! ## Quick start
//!
//! ```
//! use distlab::params::ParameterSet;
//! use distlab::registry;
//!
//! let normal = registry::get("normal").unwrap();
//! let params = ParameterSet::from([("μ", 0.0), ("σ", 1.0)]);
//!
//! let pdf = normal.density(0.0, &params).unwrap(); // 1/√(2π)
//! assert!((pdf - 0.3989).abs() < 1e-4);
//!
//! let sample = normal.sample_range(&params).unwrap(); // μ ± 4σ
//! assert_eq!(sample.xs.len(), sample.ys.len());
//! ```
//!
//! ## Modules
//!
//! - [`stats`] — The [`Distribution`] contract and the fifteen families:
//!   Binomial, Geometric, Hypergeometric, NegativeBinomial, UniformDiscrete
//!   (discrete) and Normal, Uniform, Triangular, Logistic, Cauchy, Exponential,
//!   Lognormal, Gamma, Weibull, MinimumExtreme (continuous). Each is a `Copy`
//!   value validated on construction.
//!
//! - [`registry`] — String-keyed lookup ([`registry::get`]) returning a
//!   `&'static` [`Descriptor`] with display metadata and parameter-set based
//!   evaluation. [`DistributionId`] enumerates the families, [`Family`] wraps
//!   any of them behind one type.
//!
//! - [`params`] — [`Parameter`] metadata (bounds, UI step, default, alias keys,
//!   fallback) and the caller-supplied [`ParameterSet`].
//!
//! - [`special`] — Gamma function (Lanczos), factorial, binomial coefficient,
//!   error function and normal CDF, generic over [`FloatScalar`].
//!
//! - [`traits`] — [`FloatScalar`], the float bound used by [`special`].
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `serde`   | no      | `Serialize` on metadata and results, `Deserialize` on `ParameterSet` and `DistributionId` |
//! | `tracing` | no      | `tracing` events for parameter fallbacks and rejected parameter sets |
//! | `all`     | no      | All features |

pub mod params;
pub mod registry;
pub mod special;
pub mod stats;
pub mod traits;

pub use params::{Parameter, ParameterSet};
pub use registry::{Descriptor, DistributionId, Family};
pub use stats::{Distribution, Kind, SampleRange, Statistics, StatsError};
pub use traits::FloatScalar;
