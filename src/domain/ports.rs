use crate::core::segmenter::SegmentationMode;
use crate::domain::model::TransformResult;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Both,
}

impl OutputFormat {
    pub fn wants_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn segmentation_mode(&self) -> SegmentationMode;
    fn catalog_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn dedup(&self) -> bool;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<String>;
    fn transform(&self, text: String) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
