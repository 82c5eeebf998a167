//! Fixtures shared by unit and behaviour tests across the workspace.

use crate::{ClientProfile, MemoryProfileStore, Metrics, Neighbourhood, Scorer, WeightMap};

/// Test `Scorer` that reads a single metric verbatim, ignoring weights.
#[derive(Debug, Clone)]
pub struct SingleMetricScorer {
    metric: String,
}

impl SingleMetricScorer {
    /// Score by `metric` alone.
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
        }
    }
}

impl Scorer for SingleMetricScorer {
    fn score(&self, metrics: &Metrics, _weights: &WeightMap) -> f64 {
        Self::sanitise(metrics.value(&self.metric))
    }
}

/// Profile weighting parks, local businesses and community life.
pub fn daenerys() -> ClientProfile {
    ClientProfile::new(
        "Daenerys - Mother of dragons",
        "Needs green space for her dogs and a strong community around her",
        WeightMap::from_iter([
            ("density_parks", 0.4),
            ("ratio_local_businesses", 0.25),
            ("community_organizations", 0.2),
            ("dog_friendly_parks", 0.15),
        ]),
    )
}

/// Profile weighting affluence and safety.
pub fn cersei() -> ClientProfile {
    ClientProfile::new(
        "Cersei - The queen",
        "Wants an exclusive, safe area with elite schools",
        WeightMap::from_iter([
            ("median_income", 0.35),
            ("low_crime_rate", 0.3),
            ("elite_schools", 0.2),
            ("high_rent_price", 0.15),
        ]),
    )
}

/// A memory store seeded with [`daenerys`] and [`cersei`].
pub fn seeded_store() -> MemoryProfileStore {
    MemoryProfileStore::with_profiles([("daenerys", daenerys()), ("cersei", cersei())])
}

/// Four Los Angeles neighbourhoods with raw (un-normalised) readings.
pub fn los_angeles() -> Vec<Neighbourhood> {
    vec![
        neighbourhood(
            "Beverly Hills",
            34.0736,
            -118.4004,
            &[
                ("density_parks", 7.0),
                ("ratio_local_businesses", 0.4),
                ("community_organizations", 3.0),
                ("dog_friendly_parks", 2.0),
                ("median_income", 150_000.0),
                ("low_crime_rate", 0.95),
                ("elite_schools", 9.0),
                ("high_rent_price", 4_800.0),
            ],
        ),
        neighbourhood(
            "Downtown LA",
            34.0407,
            -118.2468,
            &[
                ("density_parks", 4.0),
                ("ratio_local_businesses", 0.6),
                ("community_organizations", 8.0),
                ("dog_friendly_parks", 1.0),
                ("median_income", 60_000.0),
                ("low_crime_rate", 0.5),
                ("elite_schools", 2.0),
                ("high_rent_price", 2_900.0),
            ],
        ),
        neighbourhood(
            "Venice",
            33.985,
            -118.4695,
            &[
                ("density_parks", 9.0),
                ("ratio_local_businesses", 0.8),
                ("community_organizations", 7.0),
                ("dog_friendly_parks", 5.0),
                ("median_income", 90_000.0),
                ("low_crime_rate", 0.75),
                ("elite_schools", 4.0),
                ("high_rent_price", 3_600.0),
            ],
        ),
        neighbourhood(
            "Pasadena",
            34.1478,
            -118.1445,
            &[
                ("density_parks", 8.0),
                ("ratio_local_businesses", 0.7),
                ("community_organizations", 6.0),
                ("dog_friendly_parks", 3.0),
                ("median_income", 95_000.0),
                ("low_crime_rate", 0.8),
                ("elite_schools", 6.0),
                ("high_rent_price", 3_200.0),
            ],
        ),
    ]
}

/// Build a neighbourhood from literal metric pairs.
pub fn neighbourhood(name: &str, lat: f64, lon: f64, metrics: &[(&str, f64)]) -> Neighbourhood {
    Neighbourhood::new(name, lat, lon, metrics.iter().copied().collect())
}
