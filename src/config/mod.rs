pub mod cli;
pub mod toml_config;

use crate::core::segmenter::SegmentationMode;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "clause-extract"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Classify contract text into obligation categories and export the table")
)]
pub struct CliConfig {
    /// Path to the already-extracted plain text of the document
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Segmentation strategy: per-paragraph or whole-document span capture
    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "paragraph"))]
    pub mode: SegmentationMode,

    /// TOML catalog file overriding the built-in pattern catalog
    #[cfg_attr(feature = "cli", arg(long))]
    pub catalog: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "csv"))]
    pub format: OutputFormat,

    /// Collapse records that share (category, description). Off by default:
    /// duplicate records are the baseline behavior.
    #[cfg_attr(feature = "cli", arg(long))]
    pub dedup: bool,

    /// Print the raw extracted text before classifying
    #[cfg_attr(feature = "cli", arg(long))]
    pub show_text: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn segmentation_mode(&self) -> SegmentationMode {
        self.mode
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn dedup(&self) -> bool {
        self.dedup
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
            validate_file_extension("catalog", catalog, &["toml"])?;
        }
        Ok(())
    }
}
