use serde::{Deserialize, Serialize};

/// One classified clause: a (unit, rule) match surfaced for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseRecord {
    #[serde(rename = "Obligation Type")]
    pub obligation_type: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Business Area")]
    pub business_area: String,
}

/// One ordered piece of segmented document text. Position is 0-indexed
/// in source order; units are immutable for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub position: usize,
    pub content: String,
}

impl TextUnit {
    pub fn new(position: usize, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<ClauseRecord>,
    pub csv_output: String,
    pub json_output: String,
}
