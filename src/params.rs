//! Parameter metadata and caller-supplied parameter sets.
//!
//! A [`Parameter`] is static metadata: the canonical symbol, a label and
//! description for building controls, the `[min, max]` interval, the UI step
//! and the default. It also carries how the engine finds the value in a
//! [`ParameterSet`]: the canonical symbol first, then each alias in order,
//! then an optional fallback literal.
//!
//! ```
//! use distlab::params::{Parameter, ParameterSet};
//!
//! static MU: Parameter = Parameter::new("μ", "Mean", "Center of the distribution", -10.0, 10.0, 0.1, 0.0)
//!     .aliases(&["mu", "mean"])
//!     .fallback(0.0);
//!
//! assert_eq!(MU.resolve(&ParameterSet::from([("μ", 1.5)])), Ok(1.5));
//! assert_eq!(MU.resolve(&ParameterSet::from([("mean", 2.5)])), Ok(2.5));
//! assert_eq!(MU.resolve(&ParameterSet::new()), Ok(0.0));
//! ```

use std::collections::BTreeMap;

use crate::stats::StatsError;

/// Static description of one distribution parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    /// Canonical key, e.g. `"σ"`.
    pub symbol: &'static str,
    /// Human-readable label, e.g. `"Standard deviation"`.
    pub name: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
    /// Granularity for slider-style controls.
    pub step: f64,
    pub default: f64,
    /// Alternative keys, tried in order after the symbol.
    pub aliases: &'static [&'static str],
    /// Value used when neither the symbol nor an alias is present.
    pub fallback: Option<f64>,
}

impl Parameter {
    /// Parameter with no aliases and no fallback: the symbol is required.
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        description: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            description,
            min,
            max,
            step,
            default,
            aliases: &[],
            fallback: None,
        }
    }

    /// Set the alias keys, in lookup order.
    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Set the value used when no key is present.
    pub const fn fallback(self, value: f64) -> Self {
        Self { fallback: Some(value), ..self }
    }

    /// Clamp `value` to `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Look up this parameter's value in `params`.
    ///
    /// Tries the symbol, then each alias, then the fallback. A value that is
    /// present but NaN or infinite is rejected rather than replaced.
    pub fn resolve(&self, params: &ParameterSet) -> Result<f64, StatsError> {
        let value = match params.get(self.symbol) {
            Some(v) => v,
            None => match self.aliases.iter().find_map(|&k| params.get(k).map(|v| (k, v))) {
                Some((_key, v)) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(symbol = self.symbol, alias = _key, "parameter resolved via alias");
                    v
                }
                None => {
                    let v = self.fallback.ok_or(StatsError::MissingParameter(self.symbol))?;
                    #[cfg(feature = "tracing")]
                    tracing::trace!(symbol = self.symbol, fallback = v, "parameter absent, using fallback");
                    v
                }
            },
        };
        if !value.is_finite() {
            return Err(StatsError::NonFiniteParameter(self.symbol));
        }
        Ok(value)
    }
}

/// Caller-supplied parameter values keyed by symbol or alias.
///
/// Passed by reference to every evaluation and never retained.
///
/// ```
/// use distlab::params::ParameterSet;
///
/// let params = ParameterSet::new().with("n", 20.0).with("p", 0.5);
/// assert_eq!(params.get("n"), Some(20.0));
/// assert!(!params.contains("q"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for ParameterSet {
    fn from(pairs: [(K, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>> Extend<(K, f64)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
