//! Min-max normalisation of a metric across a candidate batch.
#![forbid(unsafe_code)]

/// Output used for every element when a batch has no spread.
pub const DEGENERATE_NORMALISED_VALUE: f64 = 0.5;

/// Rescales values into `0.0..=1.0` relative to their own minimum and maximum.
///
/// Results are batch-relative: the same raw reading normalises differently
/// when the surrounding values change.
///
/// # Examples
/// ```
/// use neighbourly_scorer::MinMaxNormaliser;
///
/// let normaliser = MinMaxNormaliser::default();
/// assert_eq!(normaliser.normalise(&[10.0, 20.0, 15.0]), vec![0.0, 1.0, 0.5]);
/// assert_eq!(normaliser.normalise(&[3.0, 3.0]), vec![0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxNormaliser {
    degenerate_value: f64,
}

impl Default for MinMaxNormaliser {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxNormaliser {
    /// Construct a normaliser using [`DEGENERATE_NORMALISED_VALUE`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            degenerate_value: DEGENERATE_NORMALISED_VALUE,
        }
    }

    /// Override the value emitted when every input is equal.
    #[must_use]
    pub const fn with_degenerate_value(mut self, value: f64) -> Self {
        self.degenerate_value = value;
        self
    }

    /// Value emitted when every input is equal.
    #[must_use]
    pub const fn degenerate_value(self) -> f64 {
        self.degenerate_value
    }

    /// Normalise `values`, preserving length and order.
    ///
    /// Empty input yields empty output. When the minimum equals the maximum
    /// (including single-element input) every output is the degenerate value.
    /// Finite bounds whose difference overflows `f64` are scaled by half
    /// before subtracting, so outputs stay within `0.0..=1.0`. Infinite inputs
    /// are the caller's concern.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling subtracts and divides by the observed range"
    )]
    pub fn normalise(self, values: &[f64]) -> Vec<f64> {
        let Some((min, max)) = bounds(values) else {
            return Vec::new();
        };
        if min == max {
            return vec![self.degenerate_value; values.len()];
        }
        let range = max - min;
        if range.is_finite() {
            return values.iter().map(|value| (value - min) / range).collect();
        }
        let half_min = min / 2.0;
        let half_range = max / 2.0 - half_min;
        values
            .iter()
            .map(|value| (value / 2.0 - half_min) / half_range)
            .collect()
    }
}

/// Normalise `values` with the default degenerate value.
#[must_use]
pub fn normalise(values: &[f64]) -> Vec<f64> {
    MinMaxNormaliser::default().normalise(values)
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
