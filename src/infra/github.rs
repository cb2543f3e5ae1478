use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::pull_request::{Milestone, PullRequest};
use crate::error::{AppError, AppResult};
use crate::services::RepositoryService;

const PAGE_SIZE: usize = 100;
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            token,
        }
    }

    fn user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    fn repository_endpoint(&self, owner: &str, repository: &str) -> String {
        format!(
            "{}/repos/{owner}/{repository}",
            self.base_url.trim_end_matches('/')
        )
    }

    fn pulls_endpoint(&self, full_name: &str) -> String {
        format!("{}/repos/{full_name}/pulls", self.base_url.trim_end_matches('/'))
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .http
            .get(url)
            .header(USER_AGENT, Self::user_agent())
            .header(ACCEPT, GITHUB_MEDIA_TYPE);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Sends the request and decodes the body, describing any failure as a string.
    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, String> {
        let response = request
            .send()
            .await
            .map_err(|err| format!("failed to call GitHub: {err}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            let message = serde_json::from_str::<GitHubErrorResponse>(&body)
                .map(|error| error.message)
                .unwrap_or(body);
            return Err(format!("GitHub responded with {status}: {message}"));
        }

        response
            .json()
            .await
            .map_err(|err| format!("failed to parse GitHub response: {err}"))
    }

    async fn fetch_repository(&self, owner: &str, repository: &str) -> AppResult<GitHubRepository> {
        let request = self.get(&self.repository_endpoint(owner, repository));
        Self::fetch(request).await.map_err(|detail| {
            AppError::load_data(
                format!("Failed to load repository data for {owner}, {repository}."),
                detail,
            )
        })
    }

    async fn fetch_pull_requests(&self, full_name: &str) -> AppResult<Vec<PullRequest>> {
        let endpoint = self.pulls_endpoint(full_name);
        let mut pull_requests = Vec::new();

        for page in 1.. {
            let request = self.get(&endpoint).query(&[
                ("state", "all".to_string()),
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
            ]);
            let batch: Vec<GitHubPullRequest> = Self::fetch(request).await.map_err(|detail| {
                AppError::load_data(
                    format!("Failed to load pull requests for repository {full_name}."),
                    detail,
                )
            })?;

            debug!("Fetched page {page} with {} pull requests.", batch.len());
            let last_page = batch.len() < PAGE_SIZE;
            pull_requests.extend(batch.into_iter().map(PullRequest::from));
            if last_page {
                break;
            }
        }

        Ok(pull_requests)
    }
}

#[async_trait]
impl RepositoryService for GitHubClient {
    async fn pull_requests(&self, owner: &str, repository: &str) -> AppResult<Vec<PullRequest>> {
        let repository = self.fetch_repository(owner, repository).await?;
        self.fetch_pull_requests(&repository.full_name).await
    }
}

#[derive(Deserialize)]
struct GitHubRepository {
    full_name: String,
}

#[derive(Deserialize)]
struct GitHubPullRequest {
    number: u64,
    title: String,
    body: Option<String>,
    milestone: Option<GitHubMilestone>,
}

#[derive(Deserialize)]
struct GitHubMilestone {
    title: String,
    closed_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

impl From<GitHubPullRequest> for PullRequest {
    fn from(pull_request: GitHubPullRequest) -> Self {
        Self {
            number: pull_request.number,
            title: pull_request.title,
            body: pull_request.body,
            milestone: pull_request.milestone.map(|milestone| Milestone {
                title: milestone.title,
                closed_at: milestone.closed_at,
            }),
        }
    }
}
