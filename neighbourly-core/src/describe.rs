//! Human-readable metric descriptions.

use serde::{Deserialize, Serialize};

/// Short description used when a metric has no catalogue entry.
pub const GENERIC_METRIC_DESCRIPTION: &str = "Neighbourhood quality metric";

/// Display text for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescription {
    /// Title shown in tables, e.g. "Park Density".
    pub display_name: String,
    /// One-line explanation of what the metric measures.
    pub short_description: String,
    /// Phrase used when citing the metric as a reason, e.g. "high park density".
    pub highlight: String,
}

impl MetricDescription {
    /// Describe an unknown metric from its key alone.
    ///
    /// Underscores become spaces and each word is title-cased.
    ///
    /// # Examples
    /// ```
    /// use neighbourly_core::MetricDescription;
    ///
    /// let fallback = MetricDescription::generic("bike_lane_km");
    /// assert_eq!(fallback.display_name, "Bike Lane Km");
    /// assert_eq!(fallback.highlight, "Bike Lane Km");
    /// ```
    #[must_use]
    pub fn generic(metric: &str) -> Self {
        let title = title_case(metric);
        Self {
            display_name: title.clone(),
            short_description: GENERIC_METRIC_DESCRIPTION.to_owned(),
            highlight: title,
        }
    }
}

/// Look up display text for metric keys.
///
/// Lookups never fail: implementers fall back to
/// [`MetricDescription::generic`] for keys they do not know.
pub trait MetricDescriber {
    /// Describe `metric`.
    fn describe(&self, metric: &str) -> MetricDescription;
}

impl<T: MetricDescriber + ?Sized> MetricDescriber for &T {
    fn describe(&self, metric: &str) -> MetricDescription {
        (**self).describe(metric)
    }
}

/// Describer that knows no metrics and always falls back.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDescriber;

impl MetricDescriber for GenericDescriber {
    fn describe(&self, metric: &str) -> MetricDescription {
        MetricDescription::generic(metric)
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(capitalise_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
