//! In-memory profile store.

use super::{ProfileStore, ProfileStoreError, Profiles, ensure_removable, prepared};
use crate::{ClientProfile, WEIGHT_SUM_TOLERANCE};

/// Profile store held entirely in memory.
///
/// Useful for embedding and tests; nothing is persisted.
#[derive(Debug, Clone)]
pub struct MemoryProfileStore {
    profiles: Profiles,
    tolerance: f64,
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self {
            profiles: Profiles::new(),
            tolerance: WEIGHT_SUM_TOLERANCE,
        }
    }
}

impl MemoryProfileStore {
    /// Create a store pre-populated with `profiles`, bypassing validation.
    pub fn with_profiles<I, K>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (K, ClientProfile)>,
        K: Into<String>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|(id, profile)| (id.into(), profile))
                .collect(),
            ..Self::default()
        }
    }

    /// Override the weight-sum tolerance applied on write.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, profile_id: &str) -> Option<&ClientProfile> {
        self.profiles.get(profile_id)
    }

    fn list(&self) -> &Profiles {
        &self.profiles
    }

    fn put(&mut self, profile_id: &str, profile: ClientProfile) -> Result<(), ProfileStoreError> {
        let profile = prepared(&self.profiles, profile_id, profile, self.tolerance)?;
        self.profiles.insert(profile_id.to_owned(), profile);
        Ok(())
    }

    fn remove(&mut self, profile_id: &str) -> Result<ClientProfile, ProfileStoreError> {
        ensure_removable(&self.profiles, profile_id)?;
        self.profiles
            .shift_remove(profile_id)
            .ok_or_else(|| ProfileStoreError::NotFound {
                profile_id: profile_id.to_owned(),
            })
    }
}
