/// Maximum number of tags kept in the history.
pub const HISTORY_LIMIT: usize = 10;

/// Recent search tags, most recent first.
///
/// Entries are lowercase and unique, and there are never more than
/// [`HISTORY_LIMIT`] of them. The list is only changed through [`record`]
/// and [`replace`]; readers get an owned copy from [`snapshot`].
///
/// [`record`]: TagHistory::record
/// [`replace`]: TagHistory::replace
/// [`snapshot`]: TagHistory::snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagHistory {
    tags: Vec<String>,
}

impl TagHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from previously persisted tags.
    ///
    /// The input goes through the same normalization as [`TagHistory::record`]:
    /// tags are lowercased, later duplicates of an earlier entry are dropped
    /// and the list is cut to [`HISTORY_LIMIT`]. Empty strings are skipped.
    pub fn from_persisted<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new();
        history.replace(tags);
        history
    }

    /// Moves `tag` (lowercased) to the front, dropping any older occurrence
    /// and anything past the limit.
    pub fn record(&mut self, tag: &str) {
        let tag = normalize_tag(tag);
        self.tags.retain(|existing| *existing != tag);
        self.tags.insert(0, tag);
        self.tags.truncate(HISTORY_LIMIT);
    }

    /// Replaces the whole history, keeping the list invariants.
    pub fn replace<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.clear();
        for tag in tags {
            if self.tags.len() == HISTORY_LIMIT {
                break;
            }
            let tag = normalize_tag(tag.as_ref());
            if tag.is_empty() || self.tags.contains(&tag) {
                continue;
            }
            self.tags.push(tag);
        }
    }

    /// Owned copy of the tags, most recent first.
    pub fn snapshot(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        self.tags.iter().any(|existing| *existing == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Canonical form of a tag as stored in the history.
pub fn normalize_tag(raw: &str) -> String {
    raw.to_lowercase()
}
