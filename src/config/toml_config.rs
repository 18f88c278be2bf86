use crate::core::catalog::{ClassificationRule, PatternCatalog};
use crate::utils::error::{ClauseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML representation of a pattern catalog. Adding a category is pure
/// data: no segmenter, matcher, or aggregator code changes.
///
/// ```toml
/// [[rule]]
/// category = "Contract Termination"
/// phrases = ["termination notice", "termination process"]
/// business_area = "Operational Risk Management"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub category: String,
    pub phrases: Vec<String>,
    pub business_area: String,
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        if file.rules.is_empty() {
            return Err(ClauseError::ConfigError {
                message: "catalog file defines no rules".to_string(),
            });
        }
        Ok(file)
    }

    /// Build the immutable catalog. Rule order in the file is preserved;
    /// a malformed rule fails the whole load with its category named.
    pub fn into_catalog(self) -> Result<PatternCatalog> {
        let mut rules = Vec::with_capacity(self.rules.len());
        for entry in self.rules {
            let phrases: Vec<&str> = entry.phrases.iter().map(String::as_str).collect();
            rules.push(ClassificationRule::new(
                entry.category,
                &phrases,
                entry.business_area,
            )?);
        }
        PatternCatalog::new(rules)
    }
}

/// Resolve the catalog for a run: a TOML file when one is configured,
/// otherwise the built-in catalog.
pub fn load_catalog(path: Option<&str>) -> Result<PatternCatalog> {
    match path {
        Some(path) => {
            tracing::debug!("Loading pattern catalog from: {}", path);
            CatalogFile::from_file(path)?.into_catalog()
        }
        None => PatternCatalog::builtin(),
    }
}
