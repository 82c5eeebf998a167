//! Facade crate for the neighbourly recommendation engine.
//!
//! This crate re-exports the core domain types together with the ranking and
//! justification pipeline. The JSON file profile store sits behind the
//! `store-json` feature.

#![forbid(unsafe_code)]

pub use neighbourly_core::{
    ClientProfile, GENERIC_METRIC_DESCRIPTION, GenericDescriber, Justification, MemoryProfileStore,
    MetricDescriber, MetricDescription, MetricValue, Metrics, Neighbourhood, ProfileStore,
    ProfileStoreError, ProfileUpdate, ProfileValidationError, Profiles, SHORT_NAME_SEPARATOR,
    ScoredNeighbourhood, Scorer, WEIGHT_SUM_TOLERANCE, WeightMap,
};

#[cfg(feature = "store-json")]
pub use neighbourly_core::JsonProfileStore;

pub use neighbourly_scorer::{
    Contribution, DEGENERATE_NORMALISED_VALUE, Justifier, LOW_THRESHOLD, MEDIUM_THRESHOLD,
    MetricCatalogue, MinMaxNormaliser, QualitativeLevel, Ranker, RecommendError, TOP_REASONS,
    VERY_LOW_THRESHOLD, WeightedSumScorer, contributions, normalise, normalise_batch,
};
