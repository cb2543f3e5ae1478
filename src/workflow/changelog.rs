use std::path::PathBuf;

use tracing::debug;

use crate::context::AppContext;
use crate::domain::entry::EntryMap;
use crate::domain::milestone::group_and_order;
use crate::domain::pull_request::{PullRequest, PullRequestFilter};
use crate::domain::version::VersionEntry;
use crate::error::{AppError, AppResult, MalformedEntry};
use crate::services::MarkdownBlocks;
use crate::workflow::extract::extract_entries;
use crate::workflow::render::render_version;

const SECTION_SEPARATOR: &str = "\n\n\n";

pub struct ChangelogOutcome {
    pub pull_requests: usize,
    pub output: PathBuf,
}

/// Builds the whole changelog document, one section per milestone.
///
/// Sections without entries are left out entirely.
pub fn build_changelog(
    parser: &dyn MarkdownBlocks,
    pull_requests: &[PullRequest],
) -> Result<String, MalformedEntry> {
    let mut sections = Vec::new();

    for group in group_and_order(pull_requests) {
        let mut entries = EntryMap::new();
        for pull_request in &group.pull_requests {
            entries.merge(extract_entries(parser, pull_request.body())?);
        }

        let section = render_version(&VersionEntry::new(&group, entries));
        if !section.is_empty() {
            sections.push(section);
        }
    }

    Ok(sections.join(SECTION_SEPARATOR))
}

/// Loads the repository's pull requests, renders the changelog and writes it out.
pub async fn write_changelog(
    ctx: &AppContext,
    filter: &PullRequestFilter,
) -> AppResult<ChangelogOutcome> {
    let config = &ctx.config;

    let pull_requests: Vec<PullRequest> = ctx
        .repository
        .pull_requests(&config.owner, &config.repository)
        .await?
        .into_iter()
        .filter(|pull_request| filter.matches(pull_request))
        .collect();

    if pull_requests.is_empty() {
        return Err(AppError::NoPullRequests {
            filtered: matches!(filter, PullRequestFilter::Milestone(_)),
        });
    }
    debug!(
        "Successfully fetched {} pull requests.",
        pull_requests.len()
    );

    let changelog = build_changelog(ctx.markdown.as_ref(), &pull_requests)?;
    debug!("Changelog:\n{changelog}");

    ctx.sink.write(&config.output, &changelog).await?;

    Ok(ChangelogOutcome {
        pull_requests: pull_requests.len(),
        output: config.output.clone(),
    })
}
