use crate::analysis::matcher::match_skills;
use crate::analysis::scorer::{score, verdict};
use crate::analysis::skill_extractor::{has_skills_tag, SkillExtractor};
use crate::config::ScreeningConfig;
use crate::error::{Error, Result};
use crate::models::ScreeningOutcome;

/// Runs extraction, matching, scoring and the verdict for one resume and job
/// description pair. Holds only immutable settings, so a single pipeline can
/// screen many candidates, including from several threads.
#[derive(Debug, Clone)]
pub struct ScreeningPipeline {
    extractor: SkillExtractor,
    config: ScreeningConfig,
}

impl ScreeningPipeline {
    pub fn new(config: ScreeningConfig) -> Self {
        Self {
            extractor: SkillExtractor::with_min_length(config.min_skill_length),
            config,
        }
    }

    pub fn screen(&self, resume_text: &str, jd_text: &str) -> Result<ScreeningOutcome> {
        // Step 1: Extract required skills
        if !has_skills_tag(jd_text) {
            tracing::warn!("Job description has no required skills declaration");
            return Err(Error::MissingSkillDeclaration);
        }
        let required_skills = self.extractor.extract(jd_text);
        if required_skills.is_empty() {
            tracing::warn!("Job description declares no usable required skills");
            return Err(Error::NoUsableSkills);
        }
        tracing::debug!("Extracted {} required skills", required_skills.len());

        // Step 2: Match against the resume
        let matches = match_skills(resume_text, &required_skills);
        tracing::debug!(
            found = matches.found.len(),
            missing = matches.missing.len(),
            "Matched required skills"
        );

        // Step 3: Score and decide
        let score = score(&matches.found, required_skills.len());
        let verdict = verdict(score, self.config.pass_threshold);
        tracing::info!("Screening result: {} ({}% match)", verdict.status, score);

        Ok(ScreeningOutcome {
            required_skills,
            matches,
            score,
            threshold: self.config.pass_threshold,
            verdict,
        })
    }
}

impl Default for ScreeningPipeline {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    #[test]
    fn test_missing_declaration_is_an_error() {
        let pipeline = ScreeningPipeline::default();
        let err = pipeline
            .screen("python developer", "Looking for a python developer")
            .unwrap_err();
        assert!(matches!(err, Error::MissingSkillDeclaration));
        assert!(err.is_declaration_failure());
        assert!(!err.is_input_failure());
    }

    #[test]
    fn test_tag_with_empty_list_is_not_a_missing_tag() {
        let err = ScreeningPipeline::default()
            .screen("python", "REQUIRED_SKILLS: , ,")
            .unwrap_err();
        assert!(matches!(err, Error::NoUsableSkills));
    }

    #[test]
    fn test_min_length_can_empty_the_list() {
        let pipeline = ScreeningPipeline::new(ScreeningConfig {
            pass_threshold: 60.0,
            min_skill_length: Some(3),
        });
        let err = pipeline.screen("go, r", "REQUIRED_SKILLS: go, r").unwrap_err();
        assert!(matches!(err, Error::NoUsableSkills));
        assert!(err.is_declaration_failure());
    }

    #[test]
    fn test_uses_configured_threshold() {
        let jd = "REQUIRED_SKILLS: python, sql, teamwork";
        let resume = "Experienced in Python and SQL development";

        let strict = ScreeningPipeline::new(ScreeningConfig {
            pass_threshold: 70.0,
            min_skill_length: None,
        });
        let outcome = strict.screen(resume, jd).unwrap();
        assert_eq!(outcome.verdict.status, Status::Rejected);
        assert_eq!(outcome.threshold, 70.0);

        let lenient = ScreeningPipeline::new(ScreeningConfig {
            pass_threshold: 66.67,
            min_skill_length: None,
        });
        assert_eq!(lenient.screen(resume, jd).unwrap().verdict.status, Status::Selected);
    }

    #[test]
    fn test_pipeline_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScreeningPipeline>();
    }
}
