use crate::core::catalog::PatternCatalog;
use crate::core::matcher::ClauseMatcher;
use crate::core::segmenter::{segment, SegmentationMode};
use crate::domain::model::ClauseRecord;
use std::collections::HashSet;

/// Drives segmentation and matching over a whole document and collects the
/// final ordered record sequence.
pub struct ClauseAggregator<'a> {
    catalog: &'a PatternCatalog,
    mode: SegmentationMode,
    dedup: bool,
}

impl<'a> ClauseAggregator<'a> {
    pub fn new(catalog: &'a PatternCatalog, mode: SegmentationMode) -> Self {
        Self {
            catalog,
            mode,
            dedup: false,
        }
    }

    /// Opt-in dedup by (category, description). Duplicate records from
    /// repeated phrases are the baseline behavior; this pass is an explicit
    /// addition, never a default.
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Classify `text` and return records ordered by (unit order, then
    /// catalog-rule order). Zero units or zero matches yields an empty
    /// sequence; that is a normal outcome, not a fault.
    pub fn classify(&self, text: &str) -> Vec<ClauseRecord> {
        let units = segment(text, self.mode);
        tracing::debug!("Segmented document into {} units", units.len());

        let matcher = ClauseMatcher::new(self.catalog, self.mode);
        let mut records = Vec::new();
        for unit in &units {
            records.extend(matcher.classify_unit(unit));
        }

        if self.dedup {
            let before = records.len();
            let mut seen = HashSet::new();
            records.retain(|r| seen.insert((r.obligation_type.clone(), r.description.clone())));
            tracing::debug!("Dedup removed {} duplicate records", before - records.len());
        }

        records
    }
}
