//! Class exclusion predicates consulted before a class is processed.

use crate::analyzers::typescript::ClassDeclaration;

/// Tag that excludes a class when it appears in the class's doc comment.
pub const DEFAULT_SKIP_TAG: &str = "@internal_sort skip";

pub trait ClassFilter: Send + Sync {
    /// Return true to leave the class exactly as written.
    fn should_skip(&self, class: &ClassDeclaration) -> bool;
}

/// Processes every class.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFilter;

impl ClassFilter for NoFilter {
    fn should_skip(&self, _class: &ClassDeclaration) -> bool {
        false
    }
}

/// Skips classes whose doc comment contains a tag. Whitespace inside the
/// tag and the comment is normalized before matching.
#[derive(Debug, Clone)]
pub struct DocTagFilter {
    tag: String,
}

impl DocTagFilter {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: normalize_whitespace(tag.as_ref()),
        }
    }
}

impl Default for DocTagFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_TAG)
    }
}

impl ClassFilter for DocTagFilter {
    fn should_skip(&self, class: &ClassDeclaration) -> bool {
        if self.tag.is_empty() {
            return false;
        }

        class
            .doc_comment
            .as_deref()
            .is_some_and(|doc| normalize_whitespace(doc).contains(&self.tag))
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
