use serde::{Deserialize, Serialize};

/// Required skills in declaration order. Entries are trimmed and non-empty;
/// duplicates are kept.
pub type SkillList = Vec<String>;

/// Partition of a [`SkillList`] into skills present in and absent from a resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub found: SkillList,
    pub missing: SkillList,
}

impl MatchResult {
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
