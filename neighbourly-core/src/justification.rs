//! Natural-language explanation attached to a recommendation.

use serde::{Deserialize, Serialize};

/// Why a neighbourhood suits a client.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Justification {
    /// One-sentence verdict naming the neighbourhood, client and score.
    pub summary: String,
    /// Up to three reasons, strongest contribution first.
    #[serde(rename = "top_3_reasons")]
    pub top_reasons: Vec<String>,
    /// Summary, reasons and the client's needs as a short paragraph.
    pub detailed_explanation: String,
    /// Score the explanation refers to.
    pub score: f64,
}
