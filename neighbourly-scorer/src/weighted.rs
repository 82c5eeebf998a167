//! Weighted linear scoring.
#![forbid(unsafe_code)]

use neighbourly_core::{Metrics, Scorer, WeightMap};

/// Sums `value × weight` over every weighted metric and clamps the result.
///
/// Metrics the record lacks, or holds as `null` or text, contribute `0.0`.
/// Metrics the record has but the weights omit are ignored. The clamp keeps
/// the score in `0.0..=1.0` even when weights do not sum to one or readings
/// were never normalised.
///
/// # Examples
/// ```
/// use neighbourly_core::{Metrics, Scorer, WeightMap};
/// use neighbourly_scorer::WeightedSumScorer;
///
/// let metrics = Metrics::from_iter([("x", 1.0), ("y", 0.5)]);
/// let weights = WeightMap::from_iter([("x", 0.5), ("y", 0.3), ("z", 0.2)]);
/// let score = WeightedSumScorer.score(&metrics, &weights);
/// assert!((score - 0.65).abs() < 1e-9);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedSumScorer;

impl Scorer for WeightedSumScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "weighted scoring multiplies and sums floating-point readings"
    )]
    fn score(&self, metrics: &Metrics, weights: &WeightMap) -> f64 {
        let raw: f64 = weights
            .iter()
            .map(|(metric, weight)| metrics.value(metric) * weight)
            .sum();
        Self::sanitise(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[("m1", 1.0)], &[("m1", 1.0)], 1.0)]
    #[case(&[("m1", 0.0)], &[("m1", 1.0)], 0.0)]
    #[case(&[("m1", 0.5), ("m2", 1.0)], &[("m1", 0.5), ("m2", 0.5)], 0.75)]
    // Unweighted metrics are ignored.
    #[case(&[("m1", 1.0), ("extra", 1.0)], &[("m1", 0.25)], 0.25)]
    // Weighted metrics the record lacks read as zero.
    #[case(&[], &[("m1", 1.0)], 0.0)]
    // Weights summing above one clamp to 1.0.
    #[case(&[("m1", 1.0), ("m2", 1.0)], &[("m1", 0.8), ("m2", 0.8)], 1.0)]
    // Unnormalised readings clamp to 1.0.
    #[case(&[("m1", 250.0)], &[("m1", 1.0)], 1.0)]
    // Negative readings clamp to 0.0.
    #[case(&[("m1", -3.0)], &[("m1", 1.0)], 0.0)]
    // Non-finite totals collapse to 0.0.
    #[case(&[("m1", f64::NAN)], &[("m1", 1.0)], 0.0)]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating-point scores"
    )]
    fn scores_weighted_sum(
        #[case] readings: &[(&str, f64)],
        #[case] weights: &[(&str, f64)],
        #[case] expected: f64,
    ) {
        let metrics: Metrics = readings.iter().copied().collect();
        let weight_map: WeightMap = weights.iter().copied().collect();
        let score = WeightedSumScorer.score(&metrics, &weight_map);
        assert!(
            (score - expected).abs() < 1e-9,
            "expected {expected}, got {score}"
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating-point scores"
    )]
    fn null_and_text_readings_score_zero() {
        let metrics: Metrics =
            serde_json::from_str(r#"{"a": null, "b": "unknown", "c": 1.0}"#).expect("metrics");
        let weights = WeightMap::from_iter([("a", 0.4), ("b", 0.4), ("c", 0.2)]);
        let score = WeightedSumScorer.score(&metrics, &weights);
        assert!((score - 0.2).abs() < 1e-9);
    }
}
