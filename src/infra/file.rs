use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::services::ChangelogSink;

/// Writes the changelog to the local file system, replacing any existing file.
pub struct FileSink;

impl FileSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChangelogSink for FileSink {
    async fn write(&self, destination: &Path, contents: &str) -> AppResult<()> {
        if destination.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(AppError::Write {
                path: destination.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "output path is empty"),
            });
        }

        tokio::fs::write(destination, contents)
            .await
            .map_err(|source| AppError::Write {
                path: destination.to_path_buf(),
                source,
            })
    }
}
