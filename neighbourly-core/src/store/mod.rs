//! Data access traits for client profiles.
//!
//! The `ProfileStore` trait defines read and write access to named
//! [`ClientProfile`] values. Writes are validated; reads are not. Stores are
//! single-writer: callers that share one across threads must serialise
//! mutations themselves.

use indexmap::IndexMap;
use thiserror::Error;

use crate::{ClientProfile, ProfileUpdate, ProfileValidationError};

#[cfg(feature = "store-json")]
mod json;
mod memory;

#[cfg(feature = "store-json")]
pub use json::JsonProfileStore;
pub use memory::MemoryProfileStore;

/// Profiles keyed by identifier, in storage order.
pub type Profiles = IndexMap<String, ClientProfile>;

/// Errors raised by profile stores.
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// No profile is stored under the identifier.
    #[error("profile '{profile_id}' does not exist")]
    NotFound {
        /// Requested identifier.
        profile_id: String,
    },
    /// The profile is write-protected and cannot be removed.
    #[error("profile '{profile_id}' is protected and cannot be removed")]
    Protected {
        /// Requested identifier.
        profile_id: String,
    },
    /// The profile failed validation.
    #[error("profile '{profile_id}' is invalid: {source}")]
    Invalid {
        /// Identifier being written.
        profile_id: String,
        /// Validation failure.
        #[source]
        source: ProfileValidationError,
    },
    /// Reading the backing file failed.
    #[cfg(feature = "store-json")]
    #[error("failed to read profiles from {path}")]
    Read {
        /// Backing file path.
        path: camino::Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The backing file did not contain a profile map.
    #[cfg(feature = "store-json")]
    #[error("failed to parse profiles in {path}")]
    Parse {
        /// Backing file path.
        path: camino::Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the profiles failed.
    #[cfg(feature = "store-json")]
    #[error("failed to serialise profiles for {path}")]
    Serialise {
        /// Backing file path.
        path: camino::Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the backing file failed.
    #[cfg(feature = "store-json")]
    #[error("failed to write profiles to {path}")]
    Write {
        /// Backing file path.
        path: camino::Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Read and write access to client profiles.
///
/// # Examples
///
/// ```rust
/// use neighbourly_core::{ClientProfile, MemoryProfileStore, ProfileStore, WeightMap};
///
/// let mut store = MemoryProfileStore::default();
/// let profile = ClientProfile::new(
///     "Bran - The three-eyed raven",
///     "Quiet streets and fast internet",
///     WeightMap::from_iter([("quietness_score", 0.7), ("internet_coverage", 0.3)]),
/// );
/// store.put("bran", profile).expect("weights sum to one");
/// assert!(store.get("bran").is_some());
///
/// let lopsided = ClientProfile::new("Arya", "Moves fast", WeightMap::from_iter([("x", 0.8)]));
/// assert!(store.put("arya", lopsided).is_err());
/// ```
pub trait ProfileStore {
    /// Return the profile stored under `profile_id`.
    fn get(&self, profile_id: &str) -> Option<&ClientProfile>;

    /// Return every stored profile.
    fn list(&self) -> &Profiles;

    /// Validate `profile` and store it under `profile_id`, replacing any
    /// existing entry. Replacing a protected entry keeps it protected.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError::Invalid`] when validation fails, or a
    /// backend-specific error when persisting fails. The store is unchanged
    /// on error.
    fn put(&mut self, profile_id: &str, profile: ClientProfile) -> Result<(), ProfileStoreError>;

    /// Remove and return the profile stored under `profile_id`.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError::NotFound`] for unknown identifiers and
    /// [`ProfileStoreError::Protected`] for protected profiles and for
    /// identifiers the store refuses to drop.
    fn remove(&mut self, profile_id: &str) -> Result<ClientProfile, ProfileStoreError>;

    /// Apply a partial update to an existing profile, then validate and store
    /// the result.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError::NotFound`] for unknown identifiers and
    /// propagates [`ProfileStore::put`] failures.
    fn update(&mut self, profile_id: &str, update: ProfileUpdate) -> Result<(), ProfileStoreError> {
        let mut profile =
            self.get(profile_id)
                .cloned()
                .ok_or_else(|| ProfileStoreError::NotFound {
                    profile_id: profile_id.to_owned(),
                })?;
        profile.apply(update);
        self.put(profile_id, profile)
    }
}

/// Validate `profile` for storage under `profile_id`, carrying over the
/// protection of the entry it replaces.
pub(crate) fn prepared(
    profiles: &Profiles,
    profile_id: &str,
    mut profile: ClientProfile,
    tolerance: f64,
) -> Result<ClientProfile, ProfileStoreError> {
    profile
        .validate_with(tolerance)
        .map_err(|source| ProfileStoreError::Invalid {
            profile_id: profile_id.to_owned(),
            source,
        })?;
    if profiles.get(profile_id).is_some_and(|stored| stored.protected) {
        profile.protected = true;
    }
    Ok(profile)
}

/// Fail with [`ProfileStoreError::Protected`] when the stored entry is
/// marked protected.
pub(crate) fn ensure_removable(profiles: &Profiles, profile_id: &str) -> Result<(), ProfileStoreError> {
    if profiles.get(profile_id).is_some_and(|stored| stored.protected) {
        return Err(ProfileStoreError::Protected {
            profile_id: profile_id.to_owned(),
        });
    }
    Ok(())
}
