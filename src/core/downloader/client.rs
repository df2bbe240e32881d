use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::core::error::{SetupError, SetupResult};

/// Fetches a URL into a local file and returns its path.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn download(&self, url: &str) -> SetupResult<PathBuf>;
}

/// Streaming HTTP downloader.
///
/// Files land in `dest_dir` under a random name, so callers that need a
/// particular extension must rename the result.
pub struct Downloader {
    client: Client,
    dest_dir: PathBuf,
    /// Extra attempts after a transport failure.
    retries: u32,
    /// Delay before the first retry; doubles on every attempt.
    backoff: Duration,
}

impl Downloader {
    pub fn new(client: Client, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            dest_dir: dest_dir.into(),
            retries: 3,
            backoff: Duration::from_secs(1),
        }
    }

    pub fn with_retries(mut self, n: u32) -> Self {
        self.retries = n;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    // ── Single file download ────────────────────────────

    /// Download `url` to `dest`, creating parent directories as needed.
    pub async fn download_file(&self, url: &str, dest: &Path) -> SetupResult<()> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|source| SetupError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let response = self.get_with_retry(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SetupError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let total_bytes = response.content_length();

        // Scoped so the handle is closed before the file is renamed or executed.
        let written = {
            let mut file = tokio::fs::File::create(dest).await.map_err(|source| SetupError::Io {
                path: dest.to_path_buf(),
                source,
            })?;

            let mut written = 0_u64;
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                file.write_all(&chunk).await.map_err(|source| SetupError::Io {
                    path: dest.to_path_buf(),
                    source,
                })?;
                written = written.saturating_add(chunk.len() as u64);
            }
            file.flush().await.map_err(|source| SetupError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
            written
        };

        debug!(bytes = written, expected = ?total_bytes, "Downloaded: {} -> {:?}", url, dest);
        Ok(())
    }

    /// Retries transport failures only; any HTTP response is returned as-is.
    async fn get_with_retry(&self, url: &str) -> SetupResult<reqwest::Response> {
        let mut last_error: Option<SetupError> = None;
        for attempt in 0..=self.retries {
            match self.client.get(url).send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    warn!("Request to {} failed (attempt {}): {}", url, attempt + 1, err);
                    last_error = Some(err.into());
                    if attempt < self.retries {
                        tokio::time::sleep(self.backoff * 2_u32.pow(attempt)).await;
                    }
                }
            }
        }
        Err(last_error.unwrap_or_else(|| SetupError::DownloadFailed {
            url: url.to_string(),
            status: 0,
        }))
    }
}

#[async_trait]
impl Fetch for Downloader {
    #[instrument(skip(self))]
    async fn download(&self, url: &str) -> SetupResult<PathBuf> {
        let dest = self.dest_dir.join(Uuid::new_v4().to_string());
        info!("Downloading {}", url);
        self.download_file(url, &dest).await?;
        info!("Downloaded into {:?}", dest);
        Ok(dest)
    }
}
