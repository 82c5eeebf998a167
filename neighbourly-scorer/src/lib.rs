//! Ranking and justification for neighbourhood recommendations.
//!
//! The pipeline has four stages:
//! - **Normalisation** rescales each weighted metric into `0.0..=1.0` across
//!   the candidate batch ([`MinMaxNormaliser`]).
//! - **Scoring** sums `value × weight` per neighbourhood and clamps the result
//!   ([`WeightedSumScorer`], an implementation of
//!   [`Scorer`](neighbourly_core::Scorer)).
//! - **Ranking** resolves a profile, normalises, scores and keeps the best N
//!   ([`Ranker`]).
//! - **Justification** cites the metrics that contributed most to a result
//!   ([`Justifier`]), described through a
//!   [`MetricDescriber`](neighbourly_core::MetricDescriber) such as the
//!   built-in [`MetricCatalogue`].
//!
//! # Examples
//!
//! ```
//! use neighbourly_core::{ClientProfile, MemoryProfileStore, Metrics, Neighbourhood, WeightMap};
//! use neighbourly_scorer::{Justifier, Ranker};
//!
//! let store = MemoryProfileStore::with_profiles([(
//!     "tyrion",
//!     ClientProfile::new(
//!         "Tyrion - The imp",
//!         "Wants restaurants and culture",
//!         WeightMap::from_iter([("restaurant_density", 0.6), ("cultural_venues", 0.4)]),
//!     ),
//! )]);
//! let batch = vec![
//!     Neighbourhood::new(
//!         "Soho",
//!         51.51,
//!         -0.13,
//!         Metrics::from_iter([("restaurant_density", 40.0), ("cultural_venues", 12.0)]),
//!     ),
//!     Neighbourhood::new(
//!         "Croydon",
//!         51.37,
//!         -0.10,
//!         Metrics::from_iter([("restaurant_density", 10.0), ("cultural_venues", 3.0)]),
//!     ),
//! ];
//!
//! let ranked = Ranker::new(&store).rank(&batch, "tyrion", 5)?;
//! let best = ranked.first().expect("non-empty batch");
//! let why = Justifier::new(&store).justify(best, "tyrion")?;
//! assert_eq!(best.name(), "Soho");
//! assert_eq!(why.top_reasons[0], "High restaurant density (high)");
//! # Ok::<(), neighbourly_scorer::RecommendError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalogue;
mod contribution;
mod error;
mod justify;
mod normalise;
mod ranker;
mod weighted;

pub use catalogue::MetricCatalogue;
pub use contribution::{Contribution, contributions};
pub use error::RecommendError;
pub use justify::{
    Justifier, LOW_THRESHOLD, MEDIUM_THRESHOLD, QualitativeLevel, TOP_REASONS, VERY_LOW_THRESHOLD,
};
pub use normalise::{DEGENERATE_NORMALISED_VALUE, MinMaxNormaliser, normalise};
pub use ranker::{Ranker, normalise_batch};
pub use weighted::WeightedSumScorer;
