//! Per-metric contributions to a weighted score.
#![forbid(unsafe_code)]

use neighbourly_core::{MetricValue, Metrics, WeightMap};

use crate::ranker::descending;

/// One weighted metric's share of a score.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// Metric key.
    pub metric: String,
    /// Reading as stored on the record; `None` when missing or `null`.
    pub value: Option<MetricValue>,
    /// Weight the profile assigns to the metric.
    pub weight: f64,
    /// `value × weight`, with non-numeric readings counting as `0.0`.
    pub contribution: f64,
}

/// Break a score down into per-metric contributions, largest first.
///
/// Every metric in `weights` yields one entry. Equal contributions keep the
/// weight map's insertion order.
///
/// # Examples
/// ```
/// use neighbourly_core::{Metrics, WeightMap};
/// use neighbourly_scorer::contributions;
///
/// let metrics = Metrics::from_iter([("parks", 0.2), ("transit", 0.9)]);
/// let weights = WeightMap::from_iter([("parks", 0.5), ("transit", 0.5)]);
/// let ranked = contributions(&metrics, &weights);
/// assert_eq!(ranked[0].metric, "transit");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "a contribution is the product of a reading and its weight"
)]
pub fn contributions(metrics: &Metrics, weights: &WeightMap) -> Vec<Contribution> {
    let mut ranked: Vec<Contribution> = weights
        .iter()
        .map(|(metric, weight)| Contribution {
            metric: metric.to_owned(),
            value: metrics.get(metric).cloned(),
            weight,
            contribution: metrics.value(metric) * weight,
        })
        .collect();
    ranked.sort_by(|a, b| descending(a.contribution, b.contribution));
    ranked
}
