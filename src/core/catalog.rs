use crate::utils::error::{ClauseError, Result};
use crate::utils::validation::validate_unique;
use regex::{Regex, RegexBuilder};

pub const OPERATIONAL_RISK: &str = "Operational Risk Management";
pub const FINANCIAL_RISK: &str = "Financial Risk Management";

/// One classification rule: an obligation category, its signal phrases
/// ("any of", case-insensitive), and the business area the category maps to.
///
/// A line-break-spanning pattern is compiled up front for whole-document
/// mode; a phrase set that cannot compile is rejected at construction with
/// the offending category's name, never dropped silently.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    category: String,
    business_area: String,
    phrases: Vec<String>,
    span_pattern: Regex,
}

impl ClassificationRule {
    pub fn new(
        category: impl Into<String>,
        phrases: &[&str],
        business_area: impl Into<String>,
    ) -> Result<Self> {
        let category = category.into();

        if phrases.is_empty() {
            return Err(ClauseError::CatalogError {
                category,
                reason: "rule has no phrases".to_string(),
            });
        }
        if let Some(blank) = phrases.iter().find(|p| p.trim().is_empty()) {
            return Err(ClauseError::CatalogError {
                category,
                reason: format!("rule contains a blank phrase: {:?}", blank),
            });
        }

        let lowered: Vec<String> = phrases.iter().map(|p| p.to_lowercase()).collect();

        // Greedy alternation over the whole text, dot matching newlines.
        // A match may swallow large stretches of text around a phrase.
        let alternation = lowered
            .iter()
            .map(|p| format!(".*{}.*", regex::escape(p)))
            .collect::<Vec<_>>()
            .join("|");
        let span_pattern = RegexBuilder::new(&format!("({})", alternation))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| ClauseError::CatalogError {
                category: category.clone(),
                reason: format!("pattern failed to compile: {}", e),
            })?;

        Ok(Self {
            category,
            business_area: business_area.into(),
            phrases: lowered,
            span_pattern,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn business_area(&self) -> &str {
        &self.business_area
    }

    /// Case-insensitive substring test: does any configured phrase occur
    /// anywhere in `text`?
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.phrases.iter().any(|p| lowered.contains(p.as_str()))
    }

    /// Greedy, line-break-spanning matches over the full text. Each span is
    /// surfaced as-is; trimming is the caller's concern.
    pub fn span_matches<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.span_pattern.find_iter(text).map(move |m| m.as_str())
    }
}

/// Ordered, immutable collection of classification rules. Rule order only
/// affects output ordering, never whether a match occurs; a unit may satisfy
/// several rules at once.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    rules: Vec<ClassificationRule>,
}

impl PatternCatalog {
    pub fn new(rules: Vec<ClassificationRule>) -> Result<Self> {
        validate_unique("category", rules.iter().map(|r| r.category()))?;
        Ok(Self { rules })
    }

    /// The built-in catalog: the five obligation categories this system
    /// ships with, in their canonical order.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            ClassificationRule::new(
                "Care Contingency / Patient Care Safeguard",
                &["continuity of care", "patient care"],
                OPERATIONAL_RISK,
            )?,
            ClassificationRule::new(
                "Contract Administration / Notices",
                &[
                    "policy updates",
                    "emergency admission",
                    "changes to required documentation",
                ],
                OPERATIONAL_RISK,
            )?,
            ClassificationRule::new(
                "Revenue Cycle Management",
                &[
                    "requests for additional information",
                    "overpayment recovery",
                    "claim denial resolution",
                ],
                FINANCIAL_RISK,
            )?,
            ClassificationRule::new(
                "Billing and Collection",
                &[
                    "prohibited billing practices",
                    "false claims",
                    "billing compliance",
                ],
                FINANCIAL_RISK,
            )?,
            ClassificationRule::new(
                "Contract Termination",
                &["termination notice", "termination process"],
                OPERATIONAL_RISK,
            )?,
        ])
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
