use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ChangelogSink, MarkdownBlocks, RepositoryService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub repository: Arc<dyn RepositoryService>,
    pub markdown: Arc<dyn MarkdownBlocks>,
    pub sink: Arc<dyn ChangelogSink>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        repository: Arc<dyn RepositoryService>,
        markdown: Arc<dyn MarkdownBlocks>,
        sink: Arc<dyn ChangelogSink>,
    ) -> Self {
        Self {
            config,
            repository,
            markdown,
            sink,
        }
    }
}
