//! Guide info payload produced by the offline guide generator.

use serde::{Deserialize, Serialize};

use super::HighlightColor;

/// Descriptive payload for a schedule item: a short story, highlight tags,
/// and a practical tip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuideInfo {
    /// Background story for the location
    pub story: String,

    /// Recommended highlights, rendered as colored tags
    #[serde(default)]
    pub highlights: Vec<HighlightTag>,

    /// Practical visiting tip
    pub tip: String,
}

/// Small colored label within a guide payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightTag {
    pub id: String,
    pub text: String,
    pub color: HighlightColor,
}
