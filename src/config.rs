use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PASS_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub resume_path: PathBuf,
    pub jd_path: PathBuf,
    pub log_path: PathBuf,
    pub pass_threshold: f64,
    pub min_skill_length: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resume_path: PathBuf::from("resume.txt"),
            jd_path: PathBuf::from("job_description.txt"),
            log_path: PathBuf::from("screening_log.txt"),
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            min_skill_length: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let resume_path = lookup("RESUME_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.resume_path);

        let jd_path = lookup("JD_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.jd_path);

        let log_path = lookup("LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);

        let pass_threshold = match lookup("PASS_THRESHOLD") {
            Some(raw) => parse_threshold(&raw)?,
            None => defaults.pass_threshold,
        };

        let min_skill_length = lookup("MIN_SKILL_LENGTH")
            .map(|raw| {
                raw.trim().parse::<usize>().map_err(|_| {
                    Error::Config(format!("MIN_SKILL_LENGTH must be a whole number, got '{}'", raw))
                })
            })
            .transpose()?;

        Ok(Self {
            resume_path,
            jd_path,
            log_path,
            pass_threshold,
            min_skill_length,
        })
    }
}

pub fn parse_threshold(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("PASS_THRESHOLD must be a number, got '{}'", raw)))?;

    if value.is_nan() {
        return Err(Error::Config("PASS_THRESHOLD must not be NaN".to_string()));
    }

    Ok(value)
}

/// The subset of settings the screening core consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreeningConfig {
    pub pass_threshold: f64,
    pub min_skill_length: Option<usize>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            min_skill_length: None,
        }
    }
}

impl From<&Config> for ScreeningConfig {
    fn from(config: &Config) -> Self {
        Self {
            pass_threshold: config.pass_threshold,
            min_skill_length: config.min_skill_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.resume_path, PathBuf::from("resume.txt"));
        assert_eq!(config.jd_path, PathBuf::from("job_description.txt"));
        assert_eq!(config.log_path, PathBuf::from("screening_log.txt"));
        assert_eq!(config.pass_threshold, 60.0);
        assert_eq!(config.min_skill_length, None);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_FILE", "cv.txt"),
            ("PASS_THRESHOLD", " 75.5 "),
            ("MIN_SKILL_LENGTH", "3"),
        ]))
        .unwrap();
        assert_eq!(config.resume_path, PathBuf::from("cv.txt"));
        assert_eq!(config.pass_threshold, 75.5);
        assert_eq!(config.min_skill_length, Some(3));
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PASS_THRESHOLD", "high")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("MIN_SKILL_LENGTH", "-1")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        assert!(parse_threshold("NaN").is_err());
    }

    #[test]
    fn test_screening_config_from_config() {
        let config = Config {
            pass_threshold: 42.0,
            min_skill_length: Some(2),
            ..Config::default()
        };
        let screening = ScreeningConfig::from(&config);
        assert_eq!(screening.pass_threshold, 42.0);
        assert_eq!(screening.min_skill_length, Some(2));
    }
}
