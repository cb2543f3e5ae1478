use async_trait::async_trait;

use crate::domain::pull_request::PullRequest;
use crate::error::AppResult;

#[async_trait]
pub trait RepositoryService: Send + Sync {
    async fn pull_requests(&self, owner: &str, repository: &str) -> AppResult<Vec<PullRequest>>;
}
