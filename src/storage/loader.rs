use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::InputKind;

/// The two validated documents a screening run needs.
#[derive(Debug, Clone)]
pub struct ScreeningInputs {
    pub resume: String,
    pub job_description: String,
}

/// Reads a UTF-8 text file, rejecting missing, unreadable and blank files.
pub fn load_text<P: AsRef<Path>>(path: P, kind: InputKind) -> Result<String> {
    let path = path.as_ref();

    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        _ => Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if text.trim().is_empty() {
        return Err(Error::EmptyInput(kind));
    }

    tracing::debug!("Loaded {} from {} ({} bytes)", kind, path.display(), text.len());
    Ok(text)
}

pub fn load_inputs<P, Q>(resume_path: P, jd_path: Q) -> Result<ScreeningInputs>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let resume = load_text(resume_path, InputKind::Resume)?;
    let job_description = load_text(jd_path, InputKind::JobDescription)?;

    Ok(ScreeningInputs {
        resume,
        job_description,
    })
}
