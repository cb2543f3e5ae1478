use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait ChangelogSink: Send + Sync {
    async fn write(&self, destination: &Path, contents: &str) -> AppResult<()>;
}
