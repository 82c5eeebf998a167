//! Neighbourhood records and their scored counterparts.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::Metrics;

/// A candidate neighbourhood with its geographic anchor and metric readings.
///
/// The serialized form is a flat record: the fixed attributes sit alongside
/// every metric key, matching the datasets produced by the upstream
/// pipeline.
///
/// # Examples
/// ```
/// use neighbourly_core::{Metrics, Neighbourhood};
///
/// let json = r#"{"name": "Venice", "lat": 33.985, "lon": -118.469, "density_parks": 0.9}"#;
/// let venice: Neighbourhood = serde_json::from_str(json).unwrap();
/// assert_eq!(venice.metrics.value("density_parks"), 0.9);
/// assert_eq!(venice.location().x, -118.469);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbourhood {
    /// Display name, unique within a working set.
    pub name: String,
    /// Latitude in degrees (WGS84).
    pub lat: f64,
    /// Longitude in degrees (WGS84).
    pub lon: f64,
    /// Postal or area code, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// Metric readings keyed by metric name.
    #[serde(flatten)]
    pub metrics: Metrics,
}

impl Neighbourhood {
    /// Construct a neighbourhood without a postal code.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, metrics: Metrics) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            zipcode: None,
            metrics,
        }
    }

    /// Attach a postal code while returning `self` for chaining.
    #[must_use]
    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Position as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// A neighbourhood paired with the score it earned for one profile.
///
/// `neighbourhood.metrics` holds the batch-normalised readings used to
/// compute `score`. Scores are derived per request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNeighbourhood {
    /// The scored record.
    #[serde(flatten)]
    pub neighbourhood: Neighbourhood,
    /// Weighted score in `0.0..=1.0`.
    pub score: f64,
}

impl ScoredNeighbourhood {
    /// Pair a neighbourhood with its score.
    #[must_use]
    pub const fn new(neighbourhood: Neighbourhood, score: f64) -> Self {
        Self {
            neighbourhood,
            score,
        }
    }

    /// Name of the scored neighbourhood.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.neighbourhood.name
    }

    /// Metric readings the score was computed from.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.neighbourhood.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_record_splits_metrics_from_attributes() {
        let record = json!({
            "name": "Downtown LA",
            "lat": 34.04,
            "lon": -118.25,
            "zipcode": "90012",
            "public_transport_coverage": 0.95,
            "cultural_diversity": null,
        });
        let neighbourhood: Neighbourhood = serde_json::from_value(record).unwrap();
        assert_eq!(neighbourhood.zipcode.as_deref(), Some("90012"));
        assert_eq!(neighbourhood.metrics.len(), 2);
        assert!(!neighbourhood.metrics.contains_key("name"));
        assert_eq!(neighbourhood.metrics.value("public_transport_coverage"), 0.95);
    }

    #[test]
    fn scored_record_serializes_flat_with_score() {
        let neighbourhood = Neighbourhood::new(
            "Pasadena",
            34.15,
            -118.14,
            Metrics::from_iter([("quietness_score", 0.6)]),
        );
        let scored = ScoredNeighbourhood::new(neighbourhood, 0.75);
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["name"], "Pasadena");
        assert_eq!(value["quietness_score"], 0.6);
        assert_eq!(value["score"], 0.75);
        assert!(value.get("zipcode").is_none());
    }

    #[test]
    fn scored_record_reads_back_without_leaking_score_into_metrics() {
        let json = r#"{"name": "Venice", "lat": 0.0, "lon": 0.0, "m": 0.5, "score": 0.5}"#;
        let scored: ScoredNeighbourhood = serde_json::from_str(json).unwrap();
        assert_eq!(scored.score, 0.5);
        assert!(!scored.metrics().contains_key("score"));
    }
}
