//! Natural-language explanations for ranked neighbourhoods.
//!
//! A justification names the weighted metrics that contributed most to a
//! score. Readings are expected to be the normalised values the
//! [`Ranker`](crate::Ranker) wrote into its output; justifying raw readings
//! produces meaningless qualitative levels.
#![forbid(unsafe_code)]

use std::fmt;

use log::debug;
use neighbourly_core::{
    ClientProfile, Justification, MetricDescriber, MetricValue, ProfileStore, ScoredNeighbourhood,
};

use crate::{MetricCatalogue, RecommendError, contributions};

/// Readings below this are "very low".
pub const VERY_LOW_THRESHOLD: f64 = 0.01;
/// Readings below this are "low".
pub const LOW_THRESHOLD: f64 = 0.3;
/// Readings below this are "medium"; anything else is "high".
pub const MEDIUM_THRESHOLD: f64 = 0.7;

/// Number of reasons a justification cites at most.
pub const TOP_REASONS: usize = 3;

/// Qualitative label for a normalised reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualitativeLevel {
    /// Below [`VERY_LOW_THRESHOLD`], or not a number.
    VeryLow,
    /// Below [`LOW_THRESHOLD`].
    Low,
    /// Below [`MEDIUM_THRESHOLD`].
    Medium,
    /// Everything else.
    High,
}

impl QualitativeLevel {
    /// Bucket `value`.
    ///
    /// # Examples
    /// ```
    /// use neighbourly_scorer::QualitativeLevel;
    ///
    /// assert_eq!(QualitativeLevel::from_value(0.005), QualitativeLevel::VeryLow);
    /// assert_eq!(QualitativeLevel::from_value(0.7), QualitativeLevel::High);
    /// ```
    #[must_use]
    pub const fn from_value(value: f64) -> Self {
        if value.is_nan() || value < VERY_LOW_THRESHOLD {
            Self::VeryLow
        } else if value < LOW_THRESHOLD {
            Self::Low
        } else if value < MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Lower-case label used in reasons.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explains scored neighbourhoods against profiles held in a store.
///
/// # Examples
/// ```
/// use neighbourly_core::{ClientProfile, MemoryProfileStore, Metrics, Neighbourhood,
///     ScoredNeighbourhood, WeightMap};
/// use neighbourly_scorer::Justifier;
///
/// let store = MemoryProfileStore::with_profiles([(
///     "jon",
///     ClientProfile::new(
///         "Jon - The bastard",
///         "Wants nature nearby",
///         WeightMap::from_iter([("proximity_nature", 1.0)]),
///     ),
/// )]);
/// let scored = ScoredNeighbourhood::new(
///     Neighbourhood::new("Highgate", 51.57, -0.15, Metrics::from_iter([("proximity_nature", 0.9)])),
///     0.9,
/// );
/// let justification = Justifier::new(&store).justify(&scored, "jon")?;
/// assert_eq!(justification.top_reasons, vec!["Closeness to nature (high)"]);
/// assert_eq!(
///     justification.summary,
///     "Highgate is an excellent choice for Jon with a score of 90.00%."
/// );
/// # Ok::<(), neighbourly_scorer::RecommendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Justifier<'s, S: ?Sized, D = MetricCatalogue> {
    store: &'s S,
    describer: D,
}

impl<'s, S: ProfileStore + ?Sized> Justifier<'s, S> {
    /// Justify using the built-in [`MetricCatalogue`].
    #[must_use]
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            describer: MetricCatalogue::default(),
        }
    }
}

impl<'s, S: ProfileStore + ?Sized, D: MetricDescriber> Justifier<'s, S, D> {
    /// Swap the metric description lookup.
    #[must_use]
    pub fn with_describer<E: MetricDescriber>(self, describer: E) -> Justifier<'s, S, E> {
        Justifier {
            store: self.store,
            describer,
        }
    }

    /// Explain why `scored` suits the stored profile `profile_id`.
    ///
    /// # Errors
    /// Returns [`RecommendError::ProfileNotFound`] when `profile_id` does not
    /// resolve.
    pub fn justify(
        &self,
        scored: &ScoredNeighbourhood,
        profile_id: &str,
    ) -> Result<Justification, RecommendError> {
        let profile =
            self.store
                .get(profile_id)
                .ok_or_else(|| RecommendError::ProfileNotFound {
                    profile_id: profile_id.to_owned(),
                })?;
        debug!("justifying '{}' for profile '{profile_id}'", scored.name());
        Ok(self.justify_for(scored, profile))
    }

    /// Explain against an already resolved profile.
    #[must_use]
    pub fn justify_for(&self, scored: &ScoredNeighbourhood, profile: &ClientProfile) -> Justification {
        let reasons: Vec<String> = contributions(scored.metrics(), &profile.weights)
            .into_iter()
            .take(TOP_REASONS)
            .map(|contribution| {
                let highlight = self.describer.describe(&contribution.metric).highlight;
                format!(
                    "{} ({})",
                    capitalise(&highlight),
                    reading_label(contribution.value.as_ref())
                )
            })
            .collect();

        let name = scored.name();
        let client = profile.short_name();
        let score = percentage(scored.score);
        let summary = format!("{name} is an excellent choice for {client} with a score of {score}.");
        let reason_sentence = format!(
            "The top reasons to choose {name} are: {}.",
            join_reasons(&reasons)
        );
        let detailed_explanation = format!(
            "{summary}\n\n{reason_sentence}\n\nWith a total score of {score}, {name} meets the \
             specific needs of {client}: {}",
            profile.description
        );

        Justification {
            summary,
            top_reasons: reasons,
            detailed_explanation,
            score: scored.score,
        }
    }
}

fn reading_label(value: Option<&MetricValue>) -> String {
    match value {
        Some(MetricValue::Number(number)) => QualitativeLevel::from_value(*number).to_string(),
        Some(other) => other.to_string(),
        None => QualitativeLevel::from_value(0.0).to_string(),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "scores are rendered as percentages"
)]
fn percentage(score: f64) -> String {
    let raw = score * 100.0;
    // Anything that rounds to zero prints unsigned.
    let percent = if raw.abs() < 0.005 { 0.0 } else { raw };
    format!("{percent:.2}%")
}

fn capitalise(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// `a`, `a and b`, `a, b and c`.
fn join_reasons(reasons: &[String]) -> String {
    match reasons.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}
