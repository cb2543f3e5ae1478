/// One `type: text` line pulled out of a pull request description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub kind: String,
    pub text: String,
}

/// Entry texts grouped by entry type.
///
/// Types keep the order in which they were first seen and texts keep the order in
/// which they were pushed, so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMap {
    groups: Vec<(String, Vec<String>)>,
}

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChangelogEntry) {
        self.texts_mut(entry.kind).push(entry.text);
    }

    /// Appends `texts` to the list for `kind`, creating it when missing. An empty
    /// `texts` still registers the type.
    pub fn extend<I>(&mut self, kind: impl Into<String>, texts: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.texts_mut(kind.into()).extend(texts);
    }

    /// Concatenates every list of `other` after the matching list of `self`.
    pub fn merge(&mut self, other: EntryMap) {
        for (kind, texts) in other.groups {
            self.extend(kind, texts);
        }
    }

    #[cfg(test)]
    pub fn get(&self, kind: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(existing, _)| existing == kind)
            .map(|(_, texts)| texts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(kind, texts)| (kind.as_str(), texts.as_slice()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn texts_mut(&mut self, kind: String) -> &mut Vec<String> {
        let index = match self.groups.iter().position(|(existing, _)| *existing == kind) {
            Some(index) => index,
            None => {
                self.groups.push((kind, Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index].1
    }
}

impl FromIterator<ChangelogEntry> for EntryMap {
    fn from_iter<T: IntoIterator<Item = ChangelogEntry>>(iter: T) -> Self {
        let mut map = EntryMap::new();
        for entry in iter {
            map.push(entry);
        }
        map
    }
}
