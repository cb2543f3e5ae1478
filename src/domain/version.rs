use chrono::{DateTime, Utc};

use crate::domain::entry::EntryMap;
use crate::domain::milestone::MilestoneGroup;

/// A milestone's title and release date together with its merged entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub title: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub entries: EntryMap,
}

impl VersionEntry {
    pub fn new(group: &MilestoneGroup<'_>, entries: EntryMap) -> Self {
        Self {
            title: group.milestone.map(|milestone| milestone.title.clone()),
            release_date: group.milestone.and_then(|milestone| milestone.closed_at),
            entries,
        }
    }
}
