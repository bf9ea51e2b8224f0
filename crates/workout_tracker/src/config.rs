use crate::WorkoutError;
use crate::report::OutputFormat;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub packages_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub fail_fast: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, WorkoutError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WorkoutError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages_path = get("WORKOUT_TRACKER_PACKAGES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let format = match get("WORKOUT_TRACKER_FORMAT") {
            Some(f) => f.parse()?,
            None => OutputFormat::default(),
        };
        let fail_fast = match get("WORKOUT_TRACKER_FAIL_FAST") {
            Some(v) => parse_flag(&v)?,
            None => false,
        };
        let log_level = get("WORKOUT_TRACKER_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        Ok(Self {
            packages_path,
            format,
            fail_fast,
            log_level,
        })
    }
}

fn parse_flag(v: &str) -> Result<bool, WorkoutError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(WorkoutError::Config(format!(
            "WORKOUT_TRACKER_FAIL_FAST: expected a boolean, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.packages_path, None);
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(!cfg.fail_fast);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "WORKOUT_TRACKER_PACKAGES" => Some("/tmp/packages.json".into()),
            "WORKOUT_TRACKER_FORMAT" => Some("json".into()),
            "WORKOUT_TRACKER_FAIL_FAST" => Some("true".into()),
            "RUST_LOG" => Some("debug".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.packages_path, Some(PathBuf::from("/tmp/packages.json")));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.fail_fast);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn own_log_level_wins_over_rust_log() {
        let get = |k: &str| match k {
            "WORKOUT_TRACKER_LOG_LEVEL" => Some("warn".into()),
            "RUST_LOG" => Some("debug".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn bad_format_is_config_error() {
        let get = |k: &str| (k == "WORKOUT_TRACKER_FORMAT").then(|| "xml".to_string());
        let res = Config::from_env_with(get);
        assert!(matches!(res, Err(WorkoutError::Config(_))));
    }

    #[test]
    fn bad_flag_is_config_error() {
        let get = |k: &str| (k == "WORKOUT_TRACKER_FAIL_FAST").then(|| "maybe".to_string());
        assert!(Config::from_env_with(get).is_err());
    }
}
