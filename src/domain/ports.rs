use crate::domain::model::{SheetExport, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sheet_id(&self) -> &str;
    fn base_url(&self) -> &str;
    fn output_file(&self) -> &str;

    /// CSV export endpoint for the configured sheet.
    fn export_url(&self) -> String {
        format!(
            "{}/spreadsheets/d/{}/export?format=csv",
            self.base_url().trim_end_matches('/'),
            self.sheet_id()
        )
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SheetExport>;
    async fn transform(&self, export: SheetExport) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
