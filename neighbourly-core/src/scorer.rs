//! Score neighbourhood metrics against a weight map.
//!
//! The `Scorer` trait assigns a suitability score to a set of
//! [`Metrics`](crate::Metrics) given a client's [`WeightMap`](crate::WeightMap).

use crate::{Metrics, WeightMap};

/// Calculate a suitability score for one neighbourhood.
///
/// Higher scores indicate a better match between the neighbourhood and the
/// client's priorities. Implementations must be thread-safe (`Send` + `Sync`)
/// so independent requests can share a scorer. The method is infallible;
/// metrics the weights reference but the record lacks read as `0.0`.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return values in the range `0.0..=1.0`, even for weights that do not sum
///   to one or metrics outside the unit interval.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use neighbourly_core::{Metrics, Scorer, WeightMap};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _metrics: &Metrics, _weights: &WeightMap) -> f64 {
///         1.0
///     }
/// }
///
/// let scorer = UnitScorer;
/// assert_eq!(scorer.score(&Metrics::new(), &WeightMap::new()), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `metrics` according to `weights`.
    fn score(&self, metrics: &Metrics, weights: &WeightMap) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    /// Negative zero comes back as `0.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        let clamped = score.clamp(0.0, 1.0);
        if clamped == 0.0 { 0.0 } else { clamped }
    }
}
