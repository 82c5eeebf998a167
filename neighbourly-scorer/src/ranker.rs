//! Batch normalisation, scoring and top-N selection.
//!
//! Ranking is batch-relative. Each weighted metric is min-max normalised
//! across the whole candidate slice before scoring, so a neighbourhood's score
//! depends on every other candidate. Rank a stable, complete candidate set:
//! ranking a subset changes every member's normalised readings, not only
//! those of the added or removed neighbourhoods.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use log::{debug, warn};
use neighbourly_core::{
    ClientProfile, Neighbourhood, ProfileStore, ScoredNeighbourhood, Scorer, WeightMap,
};

use crate::{MinMaxNormaliser, RecommendError, WeightedSumScorer};

/// Ranks neighbourhoods for profiles held in a [`ProfileStore`].
///
/// # Examples
/// ```
/// use neighbourly_core::{ClientProfile, MemoryProfileStore, Metrics, Neighbourhood, WeightMap};
/// use neighbourly_scorer::Ranker;
///
/// let store = MemoryProfileStore::with_profiles([(
///     "walker",
///     ClientProfile::new("Walker", "Likes parks", WeightMap::from_iter([("m1", 1.0)])),
/// )]);
/// let batch = vec![
///     Neighbourhood::new("A", 0.0, 0.0, Metrics::from_iter([("m1", 1.0)])),
///     Neighbourhood::new("B", 0.0, 0.0, Metrics::from_iter([("m1", 0.0)])),
/// ];
/// let ranked = Ranker::new(&store).rank(&batch, "walker", 2)?;
/// assert_eq!(ranked[0].name(), "A");
/// assert_eq!(ranked[0].score, 1.0);
/// assert_eq!(ranked[1].score, 0.0);
/// # Ok::<(), neighbourly_scorer::RecommendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<'s, S: ?Sized, C = WeightedSumScorer> {
    store: &'s S,
    scorer: C,
    normaliser: MinMaxNormaliser,
}

impl<'s, S: ProfileStore + ?Sized> Ranker<'s, S> {
    /// Rank with [`WeightedSumScorer`] and the default normaliser.
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self {
            store,
            scorer: WeightedSumScorer,
            normaliser: MinMaxNormaliser::new(),
        }
    }
}

impl<'s, S: ProfileStore + ?Sized, C: Scorer> Ranker<'s, S, C> {
    /// Swap the scoring strategy.
    #[must_use]
    pub fn with_scorer<D: Scorer>(self, scorer: D) -> Ranker<'s, S, D> {
        Ranker {
            store: self.store,
            scorer,
            normaliser: self.normaliser,
        }
    }

    /// Swap the normaliser, e.g. to change the degenerate value.
    #[must_use]
    pub const fn with_normaliser(mut self, normaliser: MinMaxNormaliser) -> Self {
        self.normaliser = normaliser;
        self
    }

    /// Score `neighbourhoods` for the stored profile `profile_id` and return
    /// the best `top_n`, highest score first.
    ///
    /// Equal scores keep their input order. Returns fewer than `top_n`
    /// entries when the batch is smaller, and none when `top_n` is zero or
    /// the batch is empty.
    ///
    /// # Errors
    /// Returns [`RecommendError::ProfileNotFound`] when `profile_id` does not
    /// resolve.
    pub fn rank(
        &self,
        neighbourhoods: &[Neighbourhood],
        profile_id: &str,
        top_n: usize,
    ) -> Result<Vec<ScoredNeighbourhood>, RecommendError> {
        let profile =
            self.store
                .get(profile_id)
                .ok_or_else(|| RecommendError::ProfileNotFound {
                    profile_id: profile_id.to_owned(),
                })?;
        debug!(
            "ranking {} neighbourhoods for profile '{profile_id}' (top {top_n})",
            neighbourhoods.len()
        );
        Ok(self.rank_for(neighbourhoods, profile, top_n))
    }

    /// Rank against an already resolved profile.
    #[must_use]
    pub fn rank_for(
        &self,
        neighbourhoods: &[Neighbourhood],
        profile: &ClientProfile,
        top_n: usize,
    ) -> Vec<ScoredNeighbourhood> {
        if profile.weights.is_empty() {
            warn!(
                "profile '{}' weights no metrics; every neighbourhood scores 0",
                profile.name
            );
        }
        let mut scored: Vec<ScoredNeighbourhood> =
            normalise_batch(neighbourhoods, &profile.weights, self.normaliser)
                .into_iter()
                .map(|neighbourhood| {
                    let score = self.scorer.score(&neighbourhood.metrics, &profile.weights);
                    ScoredNeighbourhood::new(neighbourhood, score)
                })
                .collect();
        // `sort_by` is stable, so equal scores keep input order. `-0.0` and
        // `0.0` compare equal.
        scored.sort_by(|a, b| descending(a.score, b.score));
        scored.truncate(top_n);
        scored
    }
}

/// Order scores from highest to lowest, treating signed zeros as equal and
/// falling back to the IEEE total order for NaN.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| b.total_cmp(&a))
}

/// Copy `neighbourhoods`, replacing each weighted metric with its min-max
/// normalised value across the batch.
///
/// Missing, `null`, text and non-finite readings enter normalisation as
/// `0.0`. Metrics the weights do not mention are left untouched.
#[must_use]
pub fn normalise_batch(
    neighbourhoods: &[Neighbourhood],
    weights: &WeightMap,
    normaliser: MinMaxNormaliser,
) -> Vec<Neighbourhood> {
    let mut working = neighbourhoods.to_vec();
    for metric in weights.keys() {
        let raw: Vec<f64> = neighbourhoods
            .iter()
            .map(|neighbourhood| finite_reading(neighbourhood, metric))
            .collect();
        let normalised = normaliser.normalise(&raw);
        for (neighbourhood, value) in working.iter_mut().zip(normalised) {
            neighbourhood.metrics.set(metric, value);
        }
    }
    working
}

fn finite_reading(neighbourhood: &Neighbourhood, metric: &str) -> f64 {
    let value = neighbourhood.metrics.value(metric);
    if value.is_finite() {
        value
    } else {
        warn!(
            "non-finite '{metric}' reading for '{}' treated as 0",
            neighbourhood.name
        );
        0.0
    }
}
