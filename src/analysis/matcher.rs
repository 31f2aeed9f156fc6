use crate::models::{MatchResult, SkillList};

/// Splits `required` into skills found in and missing from `resume_text`.
///
/// A skill matches when its lowercase form is a substring of the lowercase
/// resume, with no word-boundary check: `sql` matches inside `postgresql`.
/// Both output lists keep the order of `required`.
pub fn match_skills(resume_text: &str, required: &[String]) -> MatchResult {
    let resume_lower = resume_text.to_lowercase();

    let (found, missing): (SkillList, SkillList) = required
        .iter()
        .cloned()
        .partition(|skill| resume_lower.contains(&skill.to_lowercase()));

    MatchResult { found, missing }
}
