use crate::domain::model::SheetExport;
use crate::utils::error::{EtlError, Result};
use reqwest::{Client, StatusCode};

/// Downloads a sheet's CSV export with a single GET.
#[derive(Debug, Clone, Default)]
pub struct SheetFetcher {
    client: Client,
}

impl SheetFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch_csv(&self, url: &str) -> Result<SheetExport> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(EtlError::FetchError {
                status: status.as_u16(),
            });
        }

        let csv = response.text().await?;
        Ok(SheetExport { csv })
    }
}
