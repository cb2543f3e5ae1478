use crate::domain::entry::{ChangelogEntry, EntryMap};
use crate::error::MalformedEntry;
use crate::services::markdown::{Block, MarkdownBlocks};

const CHANGELOG_HEADING: &str = "changelog";
const CHANGELOG_HEADING_LEVEL: u8 = 2;
const ENTRY_SEPARATOR: char = ':';

/// Collects the `type: text` items listed under the `## Changelog` heading.
///
/// The section runs until the next level-2 heading. A document without that heading
/// yields an empty map. The first item that does not split into a non-empty type and
/// text fails the whole call.
pub fn extract_entries(
    parser: &dyn MarkdownBlocks,
    markdown: &str,
) -> Result<EntryMap, MalformedEntry> {
    raw_entries(parser, markdown)
        .into_iter()
        .map(parse_entry)
        .collect()
}

fn raw_entries<'a>(parser: &dyn MarkdownBlocks, markdown: &'a str) -> Vec<&'a str> {
    let mut entries = Vec::new();
    let mut in_changelog = false;

    for block in parser.blocks(markdown) {
        match block {
            Block::Heading { level, .. } if in_changelog && level == CHANGELOG_HEADING_LEVEL => {
                break;
            }
            Block::Heading { level, text, .. } => {
                if level == CHANGELOG_HEADING_LEVEL
                    && text.trim().to_lowercase() == CHANGELOG_HEADING
                {
                    in_changelog = true;
                }
            }
            Block::List { items, .. } if in_changelog => {
                entries.extend(
                    items
                        .into_iter()
                        .filter_map(|span| markdown.get(span))
                        .map(|item| strip_list_marker(item).trim()),
                );
            }
            Block::List { .. } | Block::Other { .. } => {}
        }
    }

    entries
}

fn strip_list_marker(item: &str) -> &str {
    let item = item.trim_start();
    if let Some(rest) = item.strip_prefix(['-', '*', '+']) {
        return rest;
    }

    let digits = item
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(item.len());
    if digits > 0 {
        if let Some(rest) = item[digits..].strip_prefix(['.', ')']) {
            return rest;
        }
    }
    item
}

fn parse_entry(raw: &str) -> Result<ChangelogEntry, MalformedEntry> {
    let malformed = || MalformedEntry {
        entry: raw.to_string(),
    };

    let (kind, text) = raw.split_once(ENTRY_SEPARATOR).ok_or_else(malformed)?;
    let (kind, text) = (kind.trim(), text.trim());
    if kind.is_empty() || text.is_empty() {
        return Err(malformed());
    }

    Ok(ChangelogEntry {
        kind: kind.to_string(),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::markdown::PulldownMarkdown;

    const CHANGELOG_AT_THE_END: &str = "\
# Summary

This pull request reworks the parser.

## Changelog

* added: an added entry
* changed: a changed entry
* deprecated: a deprecated entry
* fixed: a fixed entry
* removed: a removed entry
* security: a security entry
";

    const CHANGELOG_IN_THE_MIDDLE: &str = "\
# Summary

Some words.

## Changelog

- added: an added entry
- changed: a changed entry
- deprecated: a deprecated entry

### More

- fixed: a fixed entry
- removed: a removed entry
- security: a security entry

## Testing

- ran: the whole suite
";

    fn extract(markdown: &str) -> Result<EntryMap, MalformedEntry> {
        extract_entries(&PulldownMarkdown::new(), markdown)
    }

    fn assert_six_types(map: &EntryMap) {
        assert_eq!(map.len(), 6);
        assert_eq!(map.get("added").unwrap(), ["an added entry"]);
        assert_eq!(map.get("changed").unwrap(), ["a changed entry"]);
        assert_eq!(map.get("deprecated").unwrap(), ["a deprecated entry"]);
        assert_eq!(map.get("fixed").unwrap(), ["a fixed entry"]);
        assert_eq!(map.get("removed").unwrap(), ["a removed entry"]);
        assert_eq!(map.get("security").unwrap(), ["a security entry"]);
    }

    #[test]
    fn extracts_section_at_the_end() {
        assert_six_types(&extract(CHANGELOG_AT_THE_END).unwrap());
    }

    #[test]
    fn extracts_section_in_the_middle() {
        let map = extract(CHANGELOG_IN_THE_MIDDLE).unwrap();
        assert_six_types(&map);
        assert!(map.get("ran").is_none());
    }

    #[test]
    fn empty_description_yields_nothing() {
        assert!(extract("").unwrap().is_empty());
    }

    #[test]
    fn description_without_changelog_yields_nothing() {
        let markdown = "# Summary\n\n## Notes\n\n- added: not a changelog\n";
        assert!(extract(markdown).unwrap().is_empty());
    }

    #[test]
    fn heading_followed_by_another_section_is_empty() {
        let markdown = "## Changelog\n\n## Notes\n\n- added: belongs to notes\n";
        assert!(extract(markdown).unwrap().is_empty());
    }

    #[test]
    fn only_level_two_heading_opens_section() {
        let markdown = "# Changelog\n\n- added: x\n\n### changelog\n\n- added: y\n";
        assert!(extract(markdown).unwrap().is_empty());
    }

    #[test]
    fn heading_match_ignores_case_and_whitespace() {
        let markdown = "##   CHANGELOG  \n\n- fixed: it\n";
        assert_eq!(extract(markdown).unwrap().get("fixed").unwrap(), ["it"]);
    }

    #[test]
    fn keeps_list_order_within_a_type() {
        let markdown = "## Changelog\n\n- fixed: first\n- added: feature\n- fixed: second\n";

        let map = extract(markdown).unwrap();

        let kinds: Vec<&str> = map.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, ["fixed", "added"]);
        assert_eq!(map.get("fixed").unwrap(), ["first", "second"]);
    }

    #[test]
    fn nested_items_stay_part_of_their_parent_entry() {
        let markdown = "## Changelog\n\n- added: one\n  - nested\n- fixed: two\n";

        let map = extract(markdown).unwrap();

        assert_eq!(map.get("added").unwrap(), ["one\n  - nested"]);
        assert_eq!(map.get("fixed").unwrap(), ["two"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn splits_on_first_colon_only() {
        let markdown = "## Changelog\n\n- changed: default port: 8080\n";
        assert_eq!(
            extract(markdown).unwrap().get("changed").unwrap(),
            ["default port: 8080"]
        );
    }

    #[test]
    fn reads_ordered_lists() {
        let markdown = "## Changelog\n\n1. added: one\n2. added: two\n";
        assert_eq!(extract(markdown).unwrap().get("added").unwrap(), ["one", "two"]);
    }

    #[test]
    fn strips_list_markers() {
        assert_eq!(strip_list_marker("- added: x"), " added: x");
        assert_eq!(strip_list_marker("+ added: x"), " added: x");
        assert_eq!(strip_list_marker("12) added: x"), " added: x");
        assert_eq!(strip_list_marker("added: x"), "added: x");
    }

    #[test]
    fn item_without_colon_is_malformed() {
        let markdown = "## Changelog\n\n- added: fine\n- just some text\n";
        assert_eq!(
            extract(markdown),
            Err(MalformedEntry {
                entry: "just some text".to_string()
            })
        );
    }

    #[test]
    fn item_with_empty_type_or_text_is_malformed() {
        assert!(extract("## Changelog\n\n- : no type\n").is_err());
        assert!(extract("## Changelog\n\n- added:   \n").is_err());
    }

    #[test]
    fn malformed_items_outside_section_are_ignored() {
        let markdown = "- no colon here\n\n## Changelog\n\n- added: x\n\n## Other\n\n- nor here\n";
        assert_eq!(extract(markdown).unwrap().get("added").unwrap(), ["x"]);
    }
}
