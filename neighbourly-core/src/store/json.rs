//! Profile store backed by a single JSON document.
//!
//! The file holds an object mapping profile identifiers to profiles. It is
//! read once on open; every successful mutation rewrites the whole document
//! via a staging file and rename.

use std::collections::BTreeSet;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use neighbourly_fs::{read_to_string, write_atomically};

use super::{ProfileStore, ProfileStoreError, Profiles, prepared};
use crate::{ClientProfile, WEIGHT_SUM_TOLERANCE};

/// JSON file profile store.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use neighbourly_core::{JsonProfileStore, ProfileStore};
///
/// let store = JsonProfileStore::open(Utf8Path::new("config/clients.json"))
///     .expect("readable profile file")
///     .with_protected(["daenerys", "cersei"]);
/// for (id, profile) in store.list() {
///     println!("{id}: {}", profile.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: Utf8PathBuf,
    profiles: Profiles,
    protected: BTreeSet<String>,
    tolerance: f64,
}

impl JsonProfileStore {
    /// Load profiles from `path`.
    ///
    /// A missing file yields an empty store; it is created on the first write.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError::Read`] when the file exists but cannot be
    /// read and [`ProfileStoreError::Parse`] when it is not a profile map.
    pub fn open(path: &Utf8Path) -> Result<Self, ProfileStoreError> {
        let profiles = match read_to_string(path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| ProfileStoreError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                warn!("profile file {path} not found; starting with no profiles");
                Profiles::new()
            }
            Err(source) => {
                return Err(ProfileStoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        debug!("loaded {} profiles from {path}", profiles.len());
        Ok(Self {
            path: path.to_path_buf(),
            profiles,
            protected: BTreeSet::new(),
            tolerance: WEIGHT_SUM_TOLERANCE,
        })
    }

    /// Mark identifiers that [`ProfileStore::remove`] must refuse for this
    /// session, in addition to profiles stored as protected.
    #[must_use]
    pub fn with_protected<I, K>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.protected.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Override the weight-sum tolerance applied on write.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Report whether `profile_id` is protected, either by the stored record
    /// or through [`JsonProfileStore::with_protected`].
    #[must_use]
    pub fn is_protected(&self, profile_id: &str) -> bool {
        self.protected.contains(profile_id)
            || self.profiles.get(profile_id).is_some_and(|stored| stored.protected)
    }

    fn persist(&self) -> Result<(), ProfileStoreError> {
        let payload = serde_json::to_string_pretty(&self.profiles).map_err(|source| {
            ProfileStoreError::Serialise {
                path: self.path.clone(),
                source,
            }
        })?;
        write_atomically(&self.path, payload.as_bytes()).map_err(|source| {
            ProfileStoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl ProfileStore for JsonProfileStore {
    fn get(&self, profile_id: &str) -> Option<&ClientProfile> {
        self.profiles.get(profile_id)
    }

    fn list(&self) -> &Profiles {
        &self.profiles
    }

    fn put(&mut self, profile_id: &str, profile: ClientProfile) -> Result<(), ProfileStoreError> {
        let profile = prepared(&self.profiles, profile_id, profile, self.tolerance)?;
        let previous = self.profiles.insert(profile_id.to_owned(), profile);
        if let Err(err) = self.persist() {
            match previous {
                Some(old) => {
                    self.profiles.insert(profile_id.to_owned(), old);
                }
                None => {
                    self.profiles.shift_remove(profile_id);
                }
            }
            return Err(err);
        }
        debug!("stored profile '{profile_id}' in {}", self.path);
        Ok(())
    }

    fn remove(&mut self, profile_id: &str) -> Result<ClientProfile, ProfileStoreError> {
        if self.is_protected(profile_id) {
            return Err(ProfileStoreError::Protected {
                profile_id: profile_id.to_owned(),
            });
        }
        let (index, id, profile) =
            self.profiles
                .shift_remove_full(profile_id)
                .ok_or_else(|| ProfileStoreError::NotFound {
                    profile_id: profile_id.to_owned(),
                })?;
        if let Err(err) = self.persist() {
            self.profiles.shift_insert(index, id, profile);
            return Err(err);
        }
        debug!("removed profile '{profile_id}' from {}", self.path);
        Ok(profile)
    }
}
