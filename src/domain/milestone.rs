use crate::domain::pull_request::{Milestone, PullRequest};

/// Pull requests that share a milestone title, or that have no milestone at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneGroup<'a> {
    pub milestone: Option<&'a Milestone>,
    pub pull_requests: Vec<&'a PullRequest>,
}

impl<'a> MilestoneGroup<'a> {
    fn new(milestone: Option<&'a Milestone>) -> Self {
        Self {
            milestone,
            pull_requests: Vec::new(),
        }
    }
}

/// Groups pull requests by milestone title and orders the groups for the changelog.
///
/// Milestones are matched by title only: the first milestone seen for a title stands in
/// for every pull request carrying that title, even if later ones differ in closure date.
///
/// The result starts with the group of pull requests without a milestone (if any), then
/// open milestones by title descending, then closed milestones by closure date
/// descending. Ties keep the order in which groups were first seen.
pub fn group_and_order(pull_requests: &[PullRequest]) -> Vec<MilestoneGroup<'_>> {
    let mut unknown = MilestoneGroup::new(None);
    let mut groups: Vec<MilestoneGroup<'_>> = Vec::new();

    for pull_request in pull_requests {
        let Some(milestone) = &pull_request.milestone else {
            unknown.pull_requests.push(pull_request);
            continue;
        };

        let index = match groups
            .iter()
            .position(|group| group.milestone.is_some_and(|m| m.title == milestone.title))
        {
            Some(index) => index,
            None => {
                groups.push(MilestoneGroup::new(Some(milestone)));
                groups.len() - 1
            }
        };
        groups[index].pull_requests.push(pull_request);
    }

    let (mut open, mut closed): (Vec<_>, Vec<_>) = groups
        .into_iter()
        .partition(|group| group.milestone.is_some_and(Milestone::is_open));

    open.sort_by(|a, b| title_of(b).cmp(title_of(a)));
    closed.sort_by(|a, b| closed_at_of(b).cmp(&closed_at_of(a)));

    let mut ordered = Vec::with_capacity(open.len() + closed.len() + 1);
    if !unknown.pull_requests.is_empty() {
        ordered.push(unknown);
    }
    ordered.extend(open);
    ordered.extend(closed);
    ordered
}

fn title_of<'a>(group: &MilestoneGroup<'a>) -> &'a str {
    group.milestone.map(|m| m.title.as_str()).unwrap_or_default()
}

fn closed_at_of(group: &MilestoneGroup<'_>) -> Option<chrono::DateTime<chrono::Utc>> {
    group.milestone.and_then(|m| m.closed_at)
}
