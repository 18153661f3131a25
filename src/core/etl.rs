use crate::core::{Pipeline, TransformResult};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetch, extract and persist. Nothing is written unless the first two steps succeed.
    pub async fn run(&self) -> Result<String> {
        let result = self.preview().await?;

        tracing::info!("Loading data...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }

    /// Fetch and extract without touching storage.
    pub async fn preview(&self) -> Result<TransformResult> {
        tracing::info!("Extracting data...");
        let export = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes of CSV", export.csv.len());

        tracing::info!("Transforming data...");
        let result = self.pipeline.transform(export).await?;
        tracing::info!("Extracted {} records", result.records.len());

        Ok(result)
    }
}
