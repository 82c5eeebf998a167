//! Open-vocabulary metric maps.
//!
//! Metrics are keyed by arbitrary strings so that datasets and profiles can
//! introduce new names without a schema change. Reads go through
//! [`Metrics::value`], which treats missing, `null` and non-numeric entries as
//! `0.0`.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single metric reading as it appears in a dataset record.
///
/// Upstream pipelines occasionally emit labels, flags or nested values rather
/// than numbers. Those are kept verbatim so they can be shown to the user and
/// read as `0.0` when scored.
///
/// # Examples
/// ```
/// use neighbourly_core::MetricValue;
///
/// assert_eq!(MetricValue::Number(0.4).as_number(), Some(0.4));
/// assert_eq!(MetricValue::Text("n/a".into()).as_number(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// A numeric reading.
    Number(f64),
    /// A free-form label.
    Text(String),
    /// Any other JSON value (booleans, arrays, objects), kept as decoded.
    Other(serde_json::Value),
}

impl MetricValue {
    /// Return the numeric reading, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Other(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Metric readings for one neighbourhood, in record order.
///
/// A `None` entry mirrors an explicit JSON `null`.
///
/// # Examples
/// ```
/// use neighbourly_core::Metrics;
///
/// let metrics = Metrics::from_iter([("density_parks", 0.8)]);
/// assert_eq!(metrics.value("density_parks"), 0.8);
/// assert_eq!(metrics.value("median_income"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(IndexMap<String, Option<MetricValue>>);

impl Metrics {
    /// Construct an empty metric map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the raw entry for `key`, flattening explicit nulls to `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.0.get(key).and_then(Option::as_ref)
    }

    /// Return the numeric reading for `key`.
    ///
    /// Missing keys, `null` entries and non-numeric values all read as `0.0`.
    #[must_use]
    pub fn value(&self, key: &str) -> f64 {
        self.get(key).and_then(MetricValue::as_number).unwrap_or(0.0)
    }

    /// Insert or replace a numeric reading.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), Some(MetricValue::Number(value)));
    }

    /// Insert or replace a raw entry.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<MetricValue>) {
        self.0.insert(key.into(), value);
    }

    /// Report whether `key` is present, including `null` entries.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over entries in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&MetricValue>)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// Number of entries, including `null` ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(MetricValue::Number(value))))
                .collect(),
        )
    }
}

/// Importance weights keyed by metric name.
///
/// Iteration follows insertion order, which is also the tie-break order when
/// contributions are ranked.
///
/// # Examples
/// ```
/// use neighbourly_core::WeightMap;
///
/// let weights = WeightMap::from_iter([("x", 0.5), ("y", 0.3), ("z", 0.2)]);
/// assert_eq!(weights.keys().collect::<Vec<_>>(), vec!["x", "y", "z"]);
/// assert!((weights.total() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(IndexMap<String, f64>);

impl WeightMap {
    /// Construct an empty weight map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the weight for `metric`, if present.
    #[must_use]
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.0.get(metric).copied()
    }

    /// Insert or update a weight.
    pub fn set(&mut self, metric: impl Into<String>, weight: f64) {
        self.0.insert(metric.into(), weight);
    }

    /// Add a weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, metric: impl Into<String>, weight: f64) -> Self {
        self.set(metric, weight);
        self
    }

    /// Iterate over `(metric, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(metric, weight)| (metric.as_str(), *weight))
    }

    /// Iterate over metric names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Number of weighted metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Report whether no metric is weighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(metric, weight)| (metric.into(), weight))
                .collect(),
        )
    }
}
