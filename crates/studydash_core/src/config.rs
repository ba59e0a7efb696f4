//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve storage and log locations, log level, system theme preference
//!   and the displayed student profile.
//!
//! # Invariants
//! - `log_dir` is always absolute.
//! - Resolution never fails on missing variables; only malformed values are
//!   rejected.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_HOME: &str = "STUDYDASH_HOME";
pub const ENV_DB_PATH: &str = "STUDYDASH_DB_PATH";
pub const ENV_LOG_DIR: &str = "STUDYDASH_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "STUDYDASH_LOG_LEVEL";
pub const ENV_PREFERS_DARK: &str = "STUDYDASH_PREFERS_DARK";
pub const ENV_STUDENT_NAME: &str = "STUDYDASH_STUDENT_NAME";
pub const ENV_STUDENT_EMAIL: &str = "STUDYDASH_STUDENT_EMAIL";
pub const ENV_STUDENT_ID: &str = "STUDYDASH_STUDENT_ID";

const DATA_DIR_NAME: &str = ".studydash";
const DB_FILE_NAME: &str = "studydash.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBool { variable: &'static str, value: String },
    CurrentDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBool { variable, value } => write!(
                f,
                "`{variable}` must be one of 1|0|true|false|yes|no, got `{value}`"
            ),
            Self::CurrentDir(err) => write!(f, "cannot resolve current directory: {err}"),
        }
    }
}

impl Error for ConfigError {}

/// Student shown in the greeting and settings view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub student_id: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            email: "alex.morgan@university.edu".to_string(),
            student_id: "8842".to_string(),
        }
    }
}

impl StudentProfile {
    /// First word of the display name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("there")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub system_prefers_dark: bool,
    pub profile: StudentProfile,
}

impl DashConfig {
    /// Defaults rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            log_level: default_log_level().to_string(),
            system_prefers_dark: false,
            profile: StudentProfile::default(),
        }
    }

    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let data_dir = match var(ENV_HOME) {
            Some(home) => PathBuf::from(home),
            None => default_data_dir(var("HOME")),
        };
        let mut config = Self::with_data_dir(absolutize(&data_dir)?);

        if let Some(path) = var(ENV_DB_PATH) {
            config.db_path = absolutize(Path::new(&path))?;
        }
        if let Some(dir) = var(ENV_LOG_DIR) {
            config.log_dir = absolutize(Path::new(&dir))?;
        }
        if let Some(level) = var(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(value) = var(ENV_PREFERS_DARK) {
            config.system_prefers_dark = parse_bool(ENV_PREFERS_DARK, &value)?;
        }
        if let Some(name) = var(ENV_STUDENT_NAME) {
            config.profile.name = name;
        }
        if let Some(email) = var(ENV_STUDENT_EMAIL) {
            config.profile.email = email;
        }
        if let Some(student_id) = var(ENV_STUDENT_ID) {
            config.profile.student_id = student_id;
        }

        Ok(config)
    }
}

fn default_data_dir(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home).join(DATA_DIR_NAME),
        None => std::env::temp_dir().join(DATA_DIR_NAME),
    }
}

/// Makes `path` absolute against the current directory.
pub fn absolutize(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|err| ConfigError::CurrentDir(err.to_string()))?;
    Ok(cwd.join(path))
}

fn parse_bool(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            variable,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, DashConfig, ENV_DB_PATH, ENV_HOME, ENV_LOG_DIR, ENV_PREFERS_DARK,
        ENV_STUDENT_NAME,
    };
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn paths_derive_from_studydash_home() {
        let home = std::env::temp_dir().join("studydash-config-test");
        let home_str = home.to_str().unwrap().to_string();
        let config = DashConfig::from_lookup(lookup(&[(ENV_HOME, home_str.as_str())])).unwrap();

        assert_eq!(config.db_path, home.join("studydash.sqlite3"));
        assert_eq!(config.log_dir, home.join("logs"));
        assert!(!config.system_prefers_dark);
    }

    #[test]
    fn falls_back_to_dot_dir_under_home() {
        let config = DashConfig::from_lookup(lookup(&[("HOME", "/home/student")])).unwrap();
        assert_eq!(
            config.db_path,
            PathBuf::from("/home/student/.studydash/studydash.sqlite3")
        );
    }

    #[test]
    fn relative_path_overrides_resolve_against_current_dir() {
        let config = DashConfig::from_lookup(lookup(&[
            ("HOME", "/home/student"),
            (ENV_DB_PATH, "data/dash.sqlite3"),
            (ENV_LOG_DIR, "data/logs"),
        ]))
        .unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert!(config.db_path.is_absolute());
        assert_eq!(config.db_path, cwd.join("data/dash.sqlite3"));
        assert_eq!(config.log_dir, cwd.join("data/logs"));
    }

    #[test]
    fn overrides_profile_and_theme_preference() {
        let config = DashConfig::from_lookup(lookup(&[
            ("HOME", "/home/student"),
            (ENV_PREFERS_DARK, "yes"),
            (ENV_STUDENT_NAME, "Sam Lee"),
        ]))
        .unwrap();
        assert!(config.system_prefers_dark);
        assert_eq!(config.profile.first_name(), "Sam");
    }

    #[test]
    fn rejects_malformed_bool() {
        let err = DashConfig::from_lookup(lookup(&[
            ("HOME", "/home/student"),
            (ENV_PREFERS_DARK, "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }
}
