pub mod aggregator;
pub mod catalog;
pub mod engine;
pub mod matcher;
pub mod pipeline;
pub mod segmenter;

pub use crate::domain::model::{ClauseRecord, TextUnit, TransformResult};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::{ClauseError, Result};
