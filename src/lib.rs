pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::load_catalog, CliConfig};

pub use crate::core::catalog::{ClassificationRule, PatternCatalog};
pub use crate::core::segmenter::SegmentationMode;
pub use crate::core::{engine::ClassifyEngine, pipeline::SimplePipeline};
pub use crate::domain::model::{ClauseRecord, TextUnit};
pub use crate::domain::ports::OutputFormat;
pub use crate::utils::error::{ClauseError, Result};
