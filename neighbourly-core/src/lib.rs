//! Core domain types for the neighbourly recommendation engine.
//!
//! Neighbourhoods carry an open vocabulary of metrics; client profiles weigh
//! a subset of those metrics. The types here are shared by the scoring crate
//! and the CLI, together with the collaborator traits the scoring pipeline
//! consumes: [`ProfileStore`], [`MetricDescriber`] and [`Scorer`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod describe;
mod justification;
mod metrics;
mod neighbourhood;
mod profile;
mod scorer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use describe::{GENERIC_METRIC_DESCRIPTION, GenericDescriber, MetricDescriber, MetricDescription};
pub use justification::Justification;
pub use metrics::{MetricValue, Metrics, WeightMap};
pub use neighbourhood::{Neighbourhood, ScoredNeighbourhood};
pub use profile::{
    ClientProfile, ProfileUpdate, ProfileValidationError, SHORT_NAME_SEPARATOR,
    WEIGHT_SUM_TOLERANCE,
};
pub use scorer::Scorer;
#[cfg(feature = "store-json")]
pub use store::JsonProfileStore;
pub use store::{MemoryProfileStore, ProfileStore, ProfileStoreError, Profiles};
