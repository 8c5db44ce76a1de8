//! Metadata extraction from support-matrix Markdown documents
//!
//! Two formats are recognised: loose `key: value` lines anywhere in a board
//! README, and a leading `---`-delimited front-matter block in status
//! documents. Both are pure functions over text; absence is `None`.

mod frontmatter;
mod inline;

pub use frontmatter::{FrontMatter, extract_frontmatter};
pub use inline::extract_inline;

/// Iterate lines split on `\n`, ignoring a trailing `\r`.
fn lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
