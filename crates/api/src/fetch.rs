use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, error, warn};

use super::error::Error;

/// Bytes buffered before each write to disk.
pub const CHUNK_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The target already existed and overwrite was off. No request was made.
    Skipped,
    Downloaded { bytes: u64 },
    NotFound,
    /// Any other non-2xx status.
    Failed(u16),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Skipped | Self::Downloaded { .. })
    }
}

/// Streams remote resources into local files.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    chunk_size: usize,
}

impl Fetcher {
    pub fn new(http: reqwest::Client) -> Self {
        Fetcher {
            http,
            chunk_size: CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Fetch `url` into `path`.
    ///
    /// An existing `path` is left alone unless `overwrite` is set. Not-found and
    /// other error statuses are reported through the outcome and never touch the
    /// filesystem. Transport and IO errors are returned to the caller.
    pub async fn fetch(&self, url: &str, path: &Path, overwrite: bool) -> Result<FetchOutcome, Error> {
        if !overwrite && tokio::fs::try_exists(path).await? {
            debug!("{} already exists, skipping {}", path.display(), url);
            return Ok(FetchOutcome::Skipped);
        }

        debug!("Sending request to {}", url);
        let resp = self.http.get(url).send().await?;
        match resp.status() {
            reqwest::StatusCode::NOT_FOUND => {
                warn!("{} not found, {} left untouched", url, path.display());
                Ok(FetchOutcome::NotFound)
            }
            status if !status.is_success() => {
                error!("request {} status: {}", url, status);
                Ok(FetchOutcome::Failed(status.as_u16()))
            }
            _ => {
                let bytes = self.write_body(resp, path).await?;
                debug!("Wrote {} bytes to {}", bytes, path.display());
                Ok(FetchOutcome::Downloaded { bytes })
            }
        }
    }

    async fn write_body(&self, mut resp: reqwest::Response, path: &Path) -> Result<u64, Error> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let part = part_path(path);
        match self.stream_to(&mut resp, &part).await {
            Ok(bytes) => {
                tokio::fs::rename(&part, path).await?;
                Ok(bytes)
            }
            Err(e) => {
                if let Err(rm) = tokio::fs::remove_file(&part).await {
                    debug!("Could not remove {}: {}", part.display(), rm);
                }
                Err(e)
            }
        }
    }

    async fn stream_to(&self, resp: &mut reqwest::Response, part: &Path) -> Result<u64, Error> {
        let file = tokio::fs::File::create(part).await?;
        let mut writer = BufWriter::with_capacity(self.chunk_size, file);
        let mut bytes = 0u64;
        while let Some(chunk) = resp.chunk().await? {
            writer.write_all(&chunk).await?;
            bytes += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(bytes)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

/// In-progress downloads live next to their target as `<name>.part`.
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}
