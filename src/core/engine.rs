use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages with progress logging.
pub struct ClassifyEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ClassifyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Extracting document text...");
        let text = self.pipeline.extract()?;
        tracing::info!("Extracted {} characters", text.len());

        tracing::info!("Classifying clauses...");
        let result = self.pipeline.transform(text)?;
        if result.records.is_empty() {
            tracing::warn!("No clauses matched the predefined patterns");
        } else {
            tracing::info!("Classified {} clause records", result.records.len());
        }

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
