//! Built-in metric descriptions.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use neighbourly_core::{MetricDescriber, MetricDescription};
use serde::Deserialize;

/// `(key, display name, short description, highlight)` for the shipped
/// vocabulary.
const BUILT_IN: [(&str, &str, &str, &str); 24] = [
    (
        "density_parks",
        "Park Density",
        "Number of parks per unit area",
        "high park density",
    ),
    (
        "ratio_local_businesses",
        "Local Business Share",
        "Share of local businesses versus chains",
        "large share of local businesses",
    ),
    (
        "community_organizations",
        "Community Organisations",
        "Presence of community organisations",
        "strong presence of community organisations",
    ),
    (
        "dog_friendly_parks",
        "Dog-Friendly Parks",
        "Parks with facilities for dogs",
        "dog-friendly parks",
    ),
    (
        "median_income",
        "Median Income",
        "Median household income of the area",
        "high median income",
    ),
    (
        "low_crime_rate",
        "Low Crime Rate",
        "Low incidence of crime",
        "low crime rate",
    ),
    (
        "elite_schools",
        "Elite Schools",
        "Presence of prestigious schools",
        "presence of elite schools",
    ),
    (
        "high_rent_price",
        "Premium Housing",
        "High-quality residential area",
        "premium residential quality",
    ),
    (
        "accessibility_score",
        "Accessibility",
        "Ease of access and mobility",
        "excellent accessibility",
    ),
    (
        "quietness_score",
        "Quietness",
        "Level of ambient noise",
        "quiet, peaceful surroundings",
    ),
    (
        "internet_coverage",
        "High-Speed Internet",
        "Fibre and fast internet coverage",
        "good high-speed internet coverage",
    ),
    (
        "low_population_density",
        "Low Population Density",
        "Fewer residents per unit area",
        "low population density",
    ),
    (
        "low_rent_price",
        "Affordable Rent",
        "Affordable rental prices",
        "affordable rent",
    ),
    (
        "cultural_diversity",
        "Cultural Diversity",
        "Ethnic and cultural diversity",
        "high cultural diversity",
    ),
    (
        "proximity_nature",
        "Proximity to Nature",
        "Access to green and natural areas",
        "closeness to nature",
    ),
    (
        "community_density",
        "Community Density",
        "Strength of shared community space",
        "dense community life",
    ),
    (
        "public_transport_coverage",
        "Public Transport Coverage",
        "Metro, bus and tram coverage",
        "excellent public transport coverage",
    ),
    (
        "high_population_density",
        "High Population Density",
        "More residents per unit area",
        "high population density",
    ),
    (
        "large_neighborhood",
        "Large Neighbourhood",
        "Neighbourhood with a large territorial extent",
        "large neighbourhood",
    ),
    (
        "activity_centers",
        "Activity Centres",
        "Proximity to shopping and social centres",
        "proximity to activity centres",
    ),
    (
        "cultural_venues",
        "Cultural Venues",
        "Museums, theatres and art galleries",
        "high density of cultural venues",
    ),
    (
        "restaurant_density",
        "Restaurant Density",
        "Number of restaurants per unit area",
        "high restaurant density",
    ),
    (
        "walkability_score",
        "Walkability",
        "How easy the area is to get around on foot",
        "excellent walkability",
    ),
    (
        "public_transport_access",
        "Public Transport Access",
        "Ease of reaching public transport",
        "good access to public transport",
    ),
];

/// Metric descriptions keyed by metric name.
///
/// [`MetricCatalogue::default`] ships the built-in vocabulary. Entries can be
/// added or replaced with [`MetricCatalogue::insert`] or by extending with
/// entries deserialised from JSON of the shape
/// `{ "<metric>": { "display_name", "short_description", "highlight" } }`.
/// Unknown keys fall back to [`MetricDescription::generic`].
///
/// # Examples
/// ```
/// use neighbourly_core::MetricDescriber;
/// use neighbourly_scorer::MetricCatalogue;
///
/// let catalogue = MetricCatalogue::default();
/// assert_eq!(catalogue.describe("density_parks").highlight, "high park density");
/// assert_eq!(catalogue.describe("bike_lanes").display_name, "Bike Lanes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MetricCatalogue {
    entries: BTreeMap<String, MetricDescription>,
}

impl Default for MetricCatalogue {
    fn default() -> Self {
        BUILT_IN
            .iter()
            .map(|&(key, display_name, short_description, highlight)| {
                (
                    key.to_owned(),
                    MetricDescription {
                        display_name: display_name.to_owned(),
                        short_description: short_description.to_owned(),
                        highlight: highlight.to_owned(),
                    },
                )
            })
            .collect()
    }
}

impl MetricCatalogue {
    /// A catalogue with no entries; every lookup falls back.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Catalogue entry for `metric`, if present.
    #[must_use]
    pub fn get(&self, metric: &str) -> Option<&MetricDescription> {
        self.entries.get(metric)
    }

    /// Add or replace the entry for `metric`, returning the previous one.
    pub fn insert(
        &mut self,
        metric: impl Into<String>,
        description: MetricDescription,
    ) -> Option<MetricDescription> {
        self.entries.insert(metric.into(), description)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricDescription)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, MetricDescription)> for MetricCatalogue {
    fn from_iter<I: IntoIterator<Item = (String, MetricDescription)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, MetricDescription)> for MetricCatalogue {
    fn extend<I: IntoIterator<Item = (String, MetricDescription)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl Extend<Self> for MetricCatalogue {
    fn extend<I: IntoIterator<Item = Self>>(&mut self, iter: I) {
        for other in iter {
            self.entries.extend(other.entries);
        }
    }
}

impl MetricDescriber for MetricCatalogue {
    fn describe(&self, metric: &str) -> MetricDescription {
        self.get(metric)
            .cloned()
            .unwrap_or_else(|| MetricDescription::generic(metric))
    }
}
