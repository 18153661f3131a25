use crate::adapters::http::SheetFetcher;
use crate::core::extract::transform_sheet;
use crate::core::{ConfigProvider, Pipeline, SheetExport, Snapshot, Storage, TransformResult};
use crate::utils::error::Result;
use reqwest::Client;

/// Sheet export → giveaway records → `lastUpdated` + `data` JSON file.
pub struct SheetPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) fetcher: SheetFetcher,
}

impl<S: Storage, C: ConfigProvider> SheetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_client(storage, config, Client::new())
    }

    pub fn with_client(storage: S, config: C, client: Client) -> Self {
        Self {
            storage,
            config,
            fetcher: SheetFetcher::new(client),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SheetPipeline<S, C> {
    async fn extract(&self) -> Result<SheetExport> {
        tracing::info!("Fetching sheet data for ID: {}", self.config.sheet_id());
        self.fetcher.fetch_csv(&self.config.export_url()).await
    }

    async fn transform(&self, export: SheetExport) -> Result<TransformResult> {
        transform_sheet(&export.csv)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let count = result.records.len();
        let snapshot = Snapshot::new(result.records);
        let json = snapshot.to_json_pretty()?;

        let output_file = self.config.output_file();
        tracing::debug!("Writing {} bytes to storage", json.len());
        self.storage.write_file(output_file, json.as_bytes()).await?;

        tracing::info!("Successfully saved {} items to {}", count, output_file);
        Ok(output_file.to_string())
    }
}
