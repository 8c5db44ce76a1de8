//! Parse the leading `---` front-matter block of a status document.

use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Key/value pairs from a front-matter block.
///
/// Values that were empty or the literal `null` are stored as `None`, so a
/// present-but-null key and an absent key both read back as `None` from
/// [`FrontMatter::get`] while [`FrontMatter::contains_key`] tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: BTreeMap<String, Option<String>>,
}

impl FrontMatter {
    /// Get a non-null value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    /// Whether the key appeared in the block at all, null or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, key: &str, value: &str) {
        let value = match value {
            "" | "null" => None,
            other => Some(other.to_string()),
        };
        // Repeated keys: the later line wins.
        self.fields.insert(key.to_string(), value);
    }
}

/// Extract the front-matter block at the very start of `content`.
///
/// Returns `None` unless the first line is exactly `---` and a later line is
/// exactly `---`. Body lines that are not `key: value` are skipped.
pub fn extract_frontmatter(content: &str) -> Option<FrontMatter> {
    let mut lines = super::lines(content);
    if lines.next()? != DELIMITER {
        return None;
    }

    let mut frontmatter = FrontMatter::default();
    for line in lines {
        if line == DELIMITER {
            return Some(frontmatter);
        }
        if let Some((key, value)) = split_field(line) {
            frontmatter.insert(key, value);
        }
    }

    // No closing delimiter.
    None
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}
