use crate::domain::version::VersionEntry;

const UNKNOWN_VERSION: &str = "UNKNOWN VERSION";
const OPEN_VERSION: &str = "OPEN";
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders one version section, or an empty string when it has no entries.
pub fn render_version(version: &VersionEntry) -> String {
    if version.entries.is_empty() {
        return String::new();
    }

    let mut section = version_title(version);
    for (kind, texts) in version.entries.iter() {
        if texts.is_empty() {
            continue;
        }

        let items = texts
            .iter()
            .map(|text| format!("* {text}"))
            .collect::<Vec<_>>()
            .join("\n");
        section.push_str(&format!("\n\n### {kind}\n\n{items}"));
    }
    section
}

fn version_title(version: &VersionEntry) -> String {
    match (&version.title, version.release_date) {
        (None, _) => format!("## {UNKNOWN_VERSION}"),
        (Some(title), Some(date)) => {
            format!("## {title} ({})", date.format(RELEASE_DATE_FORMAT))
        }
        (Some(title), None) => format!("## {title} ({OPEN_VERSION})"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::entry::EntryMap;

    fn entries(groups: Vec<(&str, Vec<&str>)>) -> EntryMap {
        let mut map = EntryMap::new();
        for (kind, texts) in groups {
            map.extend(kind, texts.into_iter().map(str::to_string));
        }
        map
    }

    fn closed_version(entries: EntryMap) -> VersionEntry {
        VersionEntry {
            title: Some("v1.2.3".to_string()),
            release_date: Some(Utc.with_ymd_and_hms(1993, 11, 1, 0, 0, 0).unwrap()),
            entries,
        }
    }

    #[test]
    fn renders_closed_version() {
        let version = closed_version(entries(vec![
            ("added", vec!["first added entry", "second added entry"]),
            ("changed", vec!["first changed entry", "second changed entry"]),
        ]));

        assert_eq!(
            render_version(&version),
            "## v1.2.3 (1993-11-01)\n\n### added\n\n* first added entry\n* second added entry\n\n### changed\n\n* first changed entry\n* second changed entry"
        );
    }

    #[test]
    fn version_without_entries_renders_nothing() {
        assert_eq!(render_version(&closed_version(EntryMap::new())), "");
    }

    #[test]
    fn skips_types_without_texts() {
        let version = closed_version(entries(vec![
            ("added", vec![]),
            ("changed", vec!["first changed entry", "second changed entry"]),
        ]));

        assert_eq!(
            render_version(&version),
            "## v1.2.3 (1993-11-01)\n\n### changed\n\n* first changed entry\n* second changed entry"
        );
    }

    #[test]
    fn renders_open_version() {
        let version = VersionEntry {
            title: Some("v1.2.3".to_string()),
            release_date: None,
            entries: entries(vec![("added", vec!["first added entry", "second added entry"])]),
        };

        assert_eq!(
            render_version(&version),
            "## v1.2.3 (OPEN)\n\n### added\n\n* first added entry\n* second added entry"
        );
    }

    #[test]
    fn renders_unknown_version() {
        let version = VersionEntry {
            title: None,
            release_date: None,
            entries: entries(vec![("added", vec!["first added entry", "second added entry"])]),
        };

        assert_eq!(
            render_version(&version),
            "## UNKNOWN VERSION\n\n### added\n\n* first added entry\n* second added entry"
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let version = closed_version(entries(vec![
            ("security", vec!["s"]),
            ("added", vec!["a"]),
            ("fixed", vec!["f"]),
        ]));

        let first = render_version(&version);
        assert_eq!(first, render_version(&version));
        assert!(first.find("### security").unwrap() < first.find("### added").unwrap());
    }
}
