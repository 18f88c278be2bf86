use crate::domain::model::TextUnit;
use serde::{Deserialize, Serialize};

/// Strategy for dividing raw document text into classification units.
///
/// The two modes produce materially different granularity: paragraph mode
/// classifies line by line and surfaces whole paragraphs, whole-document
/// mode collapses the text to one unit so patterns can span line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SegmentationMode {
    #[default]
    Paragraph,
    WholeDocument,
}

/// Produce the ordered unit sequence for `text` under `mode`.
///
/// Paragraph mode splits on line breaks, trims each line, and drops lines
/// that become empty; surviving lines are indexed 0.. in source order.
/// Whole-document mode yields a single unit holding the entire text.
/// An empty document yields no units; that is a normal outcome, not a fault.
pub fn segment(text: &str, mode: SegmentationMode) -> Vec<TextUnit> {
    match mode {
        SegmentationMode::Paragraph => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(position, line)| TextUnit::new(position, line))
            .collect(),
        SegmentationMode::WholeDocument => {
            if text.is_empty() {
                Vec::new()
            } else {
                vec![TextUnit::new(0, text)]
            }
        }
    }
}
