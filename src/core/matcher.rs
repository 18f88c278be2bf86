use crate::core::catalog::PatternCatalog;
use crate::core::segmenter::SegmentationMode;
use crate::domain::model::{ClauseRecord, TextUnit};

/// Evaluates the pattern catalog against one text unit.
///
/// A unit matching zero rules contributes zero records; a unit matching k
/// rules contributes exactly k records, in catalog order. Rule order never
/// decides whether a match occurs, only where its records land.
pub struct ClauseMatcher<'a> {
    catalog: &'a PatternCatalog,
    mode: SegmentationMode,
}

impl<'a> ClauseMatcher<'a> {
    pub fn new(catalog: &'a PatternCatalog, mode: SegmentationMode) -> Self {
        Self { catalog, mode }
    }

    pub fn classify_unit(&self, unit: &TextUnit) -> Vec<ClauseRecord> {
        match self.mode {
            SegmentationMode::Paragraph => self.classify_paragraph(unit),
            SegmentationMode::WholeDocument => self.classify_document(unit),
        }
    }

    /// Paragraph mode: the classification selects which paragraphs are
    /// relevant; the full trimmed paragraph is surfaced for review, not
    /// just the matched phrase.
    fn classify_paragraph(&self, unit: &TextUnit) -> Vec<ClauseRecord> {
        let description = unit.content.trim();
        self.catalog
            .rules()
            .iter()
            .filter(|rule| rule.matches(&unit.content))
            .map(|rule| ClauseRecord {
                obligation_type: rule.category().to_string(),
                description: description.to_string(),
                business_area: rule.business_area().to_string(),
            })
            .collect()
    }

    /// Whole-document mode: the greedy, line-break-spanning pattern search
    /// runs over the full text and each trimmed match span becomes a
    /// record's description. A span can swallow large stretches of text
    /// between occurrences of anchor phrases; there is no maximum span or
    /// boundary heuristic.
    fn classify_document(&self, unit: &TextUnit) -> Vec<ClauseRecord> {
        let mut records = Vec::new();
        for rule in self.catalog.rules() {
            for span in rule.span_matches(&unit.content) {
                records.push(ClauseRecord {
                    obligation_type: rule.category().to_string(),
                    description: span.trim().to_string(),
                    business_area: rule.business_area().to_string(),
                });
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::PatternCatalog;

    fn catalog() -> PatternCatalog {
        PatternCatalog::builtin().unwrap()
    }

    #[test]
    fn test_single_rule_match_surfaces_full_paragraph() {
        let catalog = catalog();
        let matcher = ClauseMatcher::new(&catalog, SegmentationMode::Paragraph);
        let unit = TextUnit::new(0, "Upon termination notice, both parties...");
        let records = matcher.classify_unit(&unit);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].obligation_type, "Contract Termination");
        assert_eq!(records[0].business_area, "Operational Risk Management");
        assert_eq!(records[0].description, "Upon termination notice, both parties...");
    }

    #[test]
    fn test_unit_matching_two_rules_yields_two_records() {
        let catalog = catalog();
        let matcher = ClauseMatcher::new(&catalog, SegmentationMode::Paragraph);
        let unit = TextUnit::new(
            0,
            "Submission of false claims violates billing compliance requirements.",
        );
        let records = matcher.classify_unit(&unit);
        assert_eq!(records.len(), 1);
        // "false claims" and "billing compliance" belong to the same rule,
        // which still yields a single record for the unit.
        assert_eq!(records[0].obligation_type, "Billing and Collection");
    }

    #[test]
    fn test_unit_matching_rules_from_two_categories() {
        let catalog = catalog();
        let matcher = ClauseMatcher::new(&catalog, SegmentationMode::Paragraph);
        let unit = TextUnit::new(
            0,
            "The termination process must preserve continuity of care for members.",
        );
        let records = matcher.classify_unit(&unit);
        assert_eq!(records.len(), 2);
        // Catalog order, not textual order, decides record order.
        assert_eq!(
            records[0].obligation_type,
            "Care Contingency / Patient Care Safeguard"
        );
        assert_eq!(records[1].obligation_type, "Contract Termination");
        assert_eq!(records[0].description, records[1].description);
    }

    #[test]
    fn test_unmatched_unit_yields_no_records() {
        let catalog = catalog();
        let matcher = ClauseMatcher::new(&catalog, SegmentationMode::Paragraph);
        let unit = TextUnit::new(0, "This paragraph mentions nothing of interest.");
        assert!(matcher.classify_unit(&unit).is_empty());
    }

    #[test]
    fn test_whole_document_span_becomes_description() {
        let catalog = catalog();
        let matcher = ClauseMatcher::new(&catalog, SegmentationMode::WholeDocument);
        let text = "  intro line\nthe termination notice period is 90 days\nclosing line  ";
        let unit = TextUnit::new(0, text);
        let records = matcher.classify_unit(&unit);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].obligation_type, "Contract Termination");
        // Greedy span covers the surrounding lines, trimmed at the edges.
        assert_eq!(records[0].description, text.trim());
    }
}
