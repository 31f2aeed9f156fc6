use crate::models::SkillList;

/// Tag introducing the required-skills declaration line. Matched
/// ASCII-case-insensitively.
pub const SKILLS_TAG: &str = "required_skills:";

/// Extracts the required skills from a job description using [`SKILLS_TAG`].
///
/// Only the first occurrence of the tag counts, and only the remainder of its
/// line (up to any repeated tag) is read. Returns an empty list when the tag is absent.
pub fn extract_required_skills(jd_text: &str) -> SkillList {
    extract_tagged_list(jd_text, SKILLS_TAG)
}

/// True when `text` contains [`SKILLS_TAG`] in any ASCII case.
pub fn has_skills_tag(text: &str) -> bool {
    find_ignore_ascii_case(text, SKILLS_TAG).is_some()
}

/// Comma-separated list following the first case-insensitive `tag` on its line.
pub fn extract_tagged_list(text: &str, tag: &str) -> SkillList {
    let Some(start) = find_ignore_ascii_case(text, tag) else {
        return Vec::new();
    };

    let declaration = &text[start + tag.len()..];
    let line = declaration.split('\n').next().unwrap_or_default();
    // A repeated tag on the same line ends the declaration.
    let line = match find_ignore_ascii_case(line, tag) {
        Some(end) => &line[..end],
        None => line,
    };

    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

// The match is bytewise, so for a valid UTF-8 needle the returned offset and
// `offset + needle.len()` are always char boundaries.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return Some(0);
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Extractor with an optional minimum token length applied after trimming.
#[derive(Debug, Clone, Default)]
pub struct SkillExtractor {
    min_skill_length: Option<usize>,
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(min_skill_length: Option<usize>) -> Self {
        Self { min_skill_length }
    }

    pub fn extract(&self, jd_text: &str) -> SkillList {
        let skills = extract_required_skills(jd_text);

        match self.min_skill_length {
            Some(min) => skills
                .into_iter()
                .filter(|skill| skill.chars().count() >= min)
                .collect(),
            None => skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_declaration_line() {
        let jd = "Backend Engineer\nREQUIRED_SKILLS: python, sql, communication\nApply by Friday";
        assert_eq!(
            extract_required_skills(jd),
            vec!["python", "sql", "communication"]
        );
    }

    #[test]
    fn test_tag_is_case_insensitive_and_case_is_preserved() {
        let jd = "Required_Skills: Python, PostgreSQL";
        assert_eq!(extract_required_skills(jd), vec!["Python", "PostgreSQL"]);
    }

    #[test]
    fn test_drops_empty_tokens_and_trims() {
        assert_eq!(
            extract_required_skills("required_skills:a,  b ,,c"),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_tag_anywhere_on_line() {
        let jd = "Must have -> required_skills: rust , go";
        assert_eq!(extract_required_skills(jd), vec!["rust", "go"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let jd = "REQUIRED_SKILLS: java\nREQUIRED_SKILLS: kotlin, scala";
        assert_eq!(extract_required_skills(jd), vec!["java"]);
    }

    #[test]
    fn test_repeated_tag_on_same_line_truncates() {
        let jd = "REQUIRED_SKILLS: a, b required_skills: c";
        assert_eq!(extract_required_skills(jd), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_tag_yields_empty_list() {
        assert!(extract_required_skills("We need python and sql people").is_empty());
        assert!(extract_required_skills("").is_empty());
    }

    #[test]
    fn test_empty_declaration_yields_empty_list() {
        assert!(extract_required_skills("REQUIRED_SKILLS:   , ,\npython").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(
            extract_required_skills("REQUIRED_SKILLS: sql, SQL, sql"),
            vec!["sql", "SQL", "sql"]
        );
    }

    #[test]
    fn test_carriage_return_is_trimmed() {
        assert_eq!(
            extract_required_skills("REQUIRED_SKILLS: git, docker\r\nmore"),
            vec!["git", "docker"]
        );
    }

    #[test]
    fn test_non_ascii_text_around_tag() {
        let jd = "Ingénieur - REQUIRED_SKILLS: français, café";
        assert_eq!(extract_required_skills(jd), vec!["français", "café"]);
    }

    #[test]
    fn test_has_skills_tag() {
        assert!(has_skills_tag("intro\nRequired_Skills:"));
        assert!(!has_skills_tag("required skills: python"));
    }

    #[test]
    fn test_min_length_filter() {
        let jd = "REQUIRED_SKILLS: go, c, rust, ml";
        assert_eq!(SkillExtractor::new().extract(jd), vec!["go", "c", "rust", "ml"]);
        assert_eq!(
            SkillExtractor::with_min_length(Some(2)).extract(jd),
            vec!["go", "rust", "ml"]
        );
        assert!(SkillExtractor::with_min_length(Some(5)).extract(jd).is_empty());
    }
}
