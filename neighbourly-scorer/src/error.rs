//! Error types raised by the ranking and justification entry points.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while ranking or justifying recommendations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The requested profile is not in the profile store.
    #[error("profile '{profile_id}' not found")]
    ProfileNotFound {
        /// Identifier that failed to resolve.
        profile_id: String,
    },
}
