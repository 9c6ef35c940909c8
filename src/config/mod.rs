//! Runtime configuration.
//!
//! Precedence, lowest first: built-in defaults, the JSON file at
//! `~/.config/oncocalc/config.json`, then `ONCOCALC_*` environment variables.

mod error;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// The prediction service the web form was built against.
pub const DEFAULT_ENDPOINT: &str = "https://cancer-calculator-backend.onrender.com";

/// Overrides [`Config::endpoint`].
pub const ENDPOINT_VAR: &str = "ONCOCALC_ENDPOINT";
/// Overrides [`Config::log_file`].
pub const LOG_FILE_VAR: &str = "ONCOCALC_LOG_FILE";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL the prediction request is posted to.
    pub endpoint: String,
    /// Where logs are written. Defaults to the XDG data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads the user config file (if any) and applies environment overrides.
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let path = config_dir.join("oncocalc").join("config.json");
        Ok(Self::load_from(&path)?.with_env(|key| std::env::var(key).ok()))
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `ONCOCALC_*` overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            self.endpoint = endpoint;
        }
        if let Some(log_file) = lookup(LOG_FILE_VAR) {
            self.log_file = Some(PathBuf::from(log_file));
        }
        self
    }

    /// Resolves the log file path, falling back to
    /// `~/.local/share/oncocalc/oncocalc.log`.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => {
                let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
                Ok(data_dir.join("oncocalc").join("oncocalc.log"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_points_at_hosted_backend() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"endpoint": "http://localhost:5000/predict"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, "http://localhost:5000/predict");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn file_can_set_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"log_file": "/tmp/oncocalc.log"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/oncocalc.log")));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"endpiont": "typo"}"#).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }), "got {err:?}");
    }

    #[test]
    fn invalid_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn directory_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(dir.path()),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn env_overrides_file() {
        let config = Config::default().with_env(env(&[
            (ENDPOINT_VAR, "http://127.0.0.1:9000"),
            (LOG_FILE_VAR, "/var/log/oncocalc.log"),
        ]));
        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/oncocalc.log")));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = Config::default().with_env(env(&[(ENDPOINT_VAR, "")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/x.log")),
            ..Config::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/x.log"));
    }
}
