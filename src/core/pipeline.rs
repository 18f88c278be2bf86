use crate::core::aggregator::ClauseAggregator;
use crate::core::catalog::PatternCatalog;
use crate::core::{
    ClauseError, ClauseRecord, ConfigProvider, Pipeline, Result, Storage, TransformResult,
};

pub const CSV_FILENAME: &str = "extracted_clauses.csv";
pub const JSON_FILENAME: &str = "extracted_clauses.json";

const CSV_HEADER: [&str; 3] = ["Obligation Type", "Description", "Business Area"];

pub struct SimplePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: PatternCatalog,
}

impl<S: Storage, C: ConfigProvider> SimplePipeline<S, C> {
    /// The catalog is constructed once by the caller and passed in
    /// explicitly; it is never ambient state.
    pub fn new(storage: S, config: C, catalog: PatternCatalog) -> Self {
        Self {
            storage,
            config,
            catalog,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    /// Read the already-extracted document text. Turning a binary source
    /// (e.g., a PDF) into plain text is an upstream collaborator's job;
    /// this stage only decodes what it is given. A non-text input is an
    /// input fault, distinct from a document that yields no matches.
    fn extract(&self) -> Result<String> {
        tracing::debug!("Reading document text from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path())?;
        String::from_utf8(bytes).map_err(|e| ClauseError::DocumentError {
            message: format!("input is not valid UTF-8 text: {}", e),
        })
    }

    fn transform(&self, text: String) -> Result<TransformResult> {
        let aggregator = ClauseAggregator::new(&self.catalog, self.config.segmentation_mode())
            .with_dedup(self.config.dedup());
        let records = aggregator.classify(&text);

        let csv_output = serialize_csv(&records)?;
        let json_output = serde_json::to_string_pretty(&records)?;

        Ok(TransformResult {
            records,
            csv_output,
            json_output,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let format = self.config.output_format();
        let mut primary = None;

        if format.wants_csv() {
            tracing::debug!("Writing {} ({} bytes)", CSV_FILENAME, result.csv_output.len());
            self.storage
                .write_file(CSV_FILENAME, result.csv_output.as_bytes())?;
            primary = Some(format!("{}/{}", self.config.output_path(), CSV_FILENAME));
        }

        if format.wants_json() {
            tracing::debug!(
                "Writing {} ({} bytes)",
                JSON_FILENAME,
                result.json_output.len()
            );
            self.storage
                .write_file(JSON_FILENAME, result.json_output.as_bytes())?;
            if primary.is_none() {
                primary = Some(format!("{}/{}", self.config.output_path(), JSON_FILENAME));
            }
        }

        primary.ok_or_else(|| ClauseError::ConfigError {
            message: "no output format selected".to_string(),
        })
    }
}

/// Serialize records to delimited text: a header row naming the three
/// fields, one row per record, with standard quoting for embedded
/// delimiters, quotes, and newlines.
pub fn serialize_csv(records: &[ClauseRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.obligation_type.as_str(),
            record.description.as_str(),
            record.business_area.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ClauseError::ProcessingError {
            message: format!("CSV writer flush failed: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| ClauseError::ProcessingError {
        message: format!("CSV output was not valid UTF-8: {}", e),
    })
}

/// Parse the delimited export back into records. Used by consumers that
/// re-ingest a reviewed table.
pub fn parse_csv(data: &str) -> Result<Vec<ClauseRecord>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
