use std::path::PathBuf;

use thiserror::Error;

use crate::models::InputKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot find {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Something went wrong reading {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} file is empty or invalid")]
    EmptyInput(InputKind),

    #[error("No required skills declared in job description (expected a 'REQUIRED_SKILLS:' line)")]
    MissingSkillDeclaration,

    #[error("No valid keywords found in job description")]
    NoUsableSkills,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the loader could not produce usable text.
    pub fn is_input_failure(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound(_) | Error::InputUnreadable { .. } | Error::EmptyInput(_)
        )
    }

    /// True when the job description yielded no required skills.
    pub fn is_declaration_failure(&self) -> bool {
        matches!(self, Error::MissingSkillDeclaration | Error::NoUsableSkills)
    }
}
