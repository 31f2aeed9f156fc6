use serde::{Deserialize, Serialize};

use super::skill::{MatchResult, SkillList};

/// Which of the two input documents a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Resume,
    JobDescription,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Resume => write!(f, "Resume"),
            InputKind::JobDescription => write!(f, "Job description"),
        }
    }
}

/// Match percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Selected,
    Rejected,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Selected => write!(f, "SELECTED"),
            Status::Rejected => write!(f, "REJECTED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: Status,
    pub explanation: String,
}

impl Verdict {
    pub fn is_selected(&self) -> bool {
        self.status == Status::Selected
    }
}

/// Everything a single screening run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub required_skills: SkillList,
    #[serde(flatten)]
    pub matches: MatchResult,
    pub score: Score,
    pub threshold: f64,
    pub verdict: Verdict,
}

impl ScreeningOutcome {
    /// Message recorded in the screening log for a completed run.
    pub fn summary_line(&self) -> String {
        format!(
            "Screening completed - {} ({}% match)",
            self.verdict.status, self.score
        )
    }
}
