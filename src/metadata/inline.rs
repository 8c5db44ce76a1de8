//! Inline `key: value` extraction.

/// Return the trimmed value of the first line that starts with `key:`.
///
/// The key is compared case-insensitively and later duplicates are ignored.
/// A line with nothing at all after the colon is not a match; a line with
/// only whitespace after it matches with an empty value.
pub fn extract_inline(content: &str, key: &str) -> Option<String> {
    super::lines(content).find_map(|line| match_line(line, key))
}

fn match_line(line: &str, key: &str) -> Option<String> {
    let head = line.get(..key.len())?;
    if !head.eq_ignore_ascii_case(key) {
        return None;
    }
    let rest = line[key.len()..].strip_prefix(':')?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.trim().to_string())
}
