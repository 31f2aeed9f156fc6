pub mod pipeline;
pub mod skill_extractor;
pub mod matcher;
pub mod scorer;

pub use pipeline::ScreeningPipeline;
pub use skill_extractor::{extract_required_skills, has_skills_tag, SkillExtractor, SKILLS_TAG};
pub use matcher::match_skills;
pub use scorer::{score, verdict};
