use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub title: String,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Milestone {
    #[cfg(test)]
    pub fn open(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            closed_at: None,
        }
    }

    #[cfg(test)]
    pub fn closed(title: impl Into<String>, closed_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            closed_at: Some(closed_at),
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub milestone: Option<Milestone>,
}

impl PullRequest {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Which pull requests take part in a changelog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestFilter {
    All,
    ExcludeUnknown,
    Milestone(String),
}

impl PullRequestFilter {
    pub fn matches(&self, pull_request: &PullRequest) -> bool {
        match self {
            PullRequestFilter::All => true,
            PullRequestFilter::ExcludeUnknown => pull_request.milestone.is_some(),
            PullRequestFilter::Milestone(title) => pull_request
                .milestone
                .as_ref()
                .is_some_and(|milestone| &milestone.title == title),
        }
    }
}
