use crate::errors::{AppError, AppResult};
use futures::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

/// Saves the body of a remote resource to a local file.
#[allow(async_fn_in_trait)]
pub trait ImageFetcher {
    async fn fetch(&self, url: &Url, dest: &Path) -> AppResult<()>;
}

/// [`ImageFetcher`] over plain HTTP(S) GET. No retries, no timeout override.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, dest: &Path) -> AppResult<()> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to download {url}: {e}")))?;

        // Check status before error_for_status (which converts 4xx/5xx to errors)
        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            let status_code = status.as_u16();
            AppError::NetworkError(format!("HTTP {status_code}: Failed to download {url}: {e}"))
        })?;

        let mut file = File::create(dest).await.map_err(|e| {
            AppError::IoError(format!("Failed to create file {}: {}", dest.display(), e))
        })?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(|e| {
                AppError::IoError(format!("Failed to write to {}: {}", dest.display(), e))
            })?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!(url = %url, bytes = written, "Fetched remote file");
        Ok(())
    }
}
