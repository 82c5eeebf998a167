//! Client profiles: named importance weights over neighbourhood metrics.
//!
//! Profiles are validated when written to a [`ProfileStore`](crate::ProfileStore),
//! never when read. Scoring tolerates malformed weights by clamping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::WeightMap;

/// Maximum allowed distance between the weight total and `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Separator splitting a display name into a short name and a tagline.
pub const SHORT_NAME_SEPARATOR: &str = " - ";

/// A client's priorities expressed as weights over metrics.
///
/// # Examples
/// ```
/// use neighbourly_core::{ClientProfile, WeightMap};
///
/// let weights = WeightMap::from_iter([("density_parks", 0.6), ("low_crime_rate", 0.4)]);
/// let profile = ClientProfile::new("Daenerys - Dragon mother", "Needs space", weights);
/// assert_eq!(profile.short_name(), "Daenerys");
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Display name, optionally `"<short name> - <tagline>"`.
    #[serde(default)]
    pub name: String,
    /// Free-text description of the client's needs.
    #[serde(default)]
    pub description: String,
    /// Importance weights keyed by metric name.
    #[serde(default)]
    pub weights: WeightMap,
    /// Opaque preferences carried through unchanged.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub preferences: Map<String, Value>,
    /// Stores refuse to remove a protected profile. Replacing or updating a
    /// stored protected profile keeps the flag set.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub protected: bool,
}

/// Reasons a profile is rejected on write.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileValidationError {
    /// The display name is empty or whitespace.
    #[error("profile name is required")]
    MissingName,
    /// The description is empty or whitespace.
    #[error("profile description is required")]
    MissingDescription,
    /// A weight was negative or not finite.
    #[error("weight for metric '{metric}' must be a finite, non-negative number")]
    InvalidWeight {
        /// Offending metric key.
        metric: String,
    },
    /// The weights do not sum to `1.0` within tolerance.
    #[error("weights must sum to 1.0, currently sum to {total:.2}")]
    WeightSum {
        /// Observed total.
        total: f64,
    },
}

impl ClientProfile {
    /// Construct a profile without preferences.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        weights: WeightMap,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weights,
            preferences: Map::new(),
            protected: false,
        }
    }

    /// Mark the profile as protected from removal.
    #[must_use]
    pub fn into_protected(mut self) -> Self {
        self.protected = true;
        self
    }

    /// The portion of the display name before [`SHORT_NAME_SEPARATOR`].
    ///
    /// # Examples
    /// ```
    /// use neighbourly_core::{ClientProfile, WeightMap};
    ///
    /// let plain = ClientProfile::new("Arya", "", WeightMap::new());
    /// assert_eq!(plain.short_name(), "Arya");
    /// ```
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name
            .split(SHORT_NAME_SEPARATOR)
            .next()
            .unwrap_or(&self.name)
    }

    /// Validate against the default [`WEIGHT_SUM_TOLERANCE`].
    ///
    /// # Errors
    /// See [`ClientProfile::validate_with`].
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        self.validate_with(WEIGHT_SUM_TOLERANCE)
    }

    /// Validate required fields and the weight invariant.
    ///
    /// # Errors
    /// Returns the first failing check, in order: name, description,
    /// individual weights, weight total.
    pub fn validate_with(&self, tolerance: f64) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ProfileValidationError::MissingDescription);
        }
        if let Some((metric, _)) = self
            .weights
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(ProfileValidationError::InvalidWeight {
                metric: metric.to_owned(),
            });
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > tolerance {
            return Err(ProfileValidationError::WeightSum { total });
        }
        Ok(())
    }

    /// Overwrite the fields present in `update`.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            description,
            weights,
            preferences,
        } = update;
        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = weights {
            self.weights = value;
        }
        if let Some(value) = preferences {
            self.preferences = value;
        }
    }
}

/// A partial profile edit. Absent fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Replacement display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement weight map.
    #[serde(default)]
    pub weights: Option<WeightMap>,
    /// Replacement preferences.
    #[serde(default)]
    pub preferences: Option<Map<String, Value>>,
}
