use crate::application::DEFAULT_ROWS_PER_PAGE_OPTIONS;
use crate::domain::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_VAR: &str = "TSFORM_CONFIG";

/// Runtime settings. Every key is optional in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the passenger API, without trailing slash
    pub api_base_url: String,
    /// Initial page size of the passenger table
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    pub request_timeout_secs: u64,
    /// Where completed signups are POSTed; logged only when unset
    pub submit_url: Option<String>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.instantwebtools.net/v1".to_string(),
            rows_per_page: 10,
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            request_timeout_secs: 10,
            submit_url: None,
            log_file: PathBuf::from("tsform.log"),
        }
    }
}

impl AppConfig {
    /// Loads the file named by `TSFORM_CONFIG` (if set), applies
    /// environment overrides and validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// Overrides settings from `lookup`, which maps an environment variable
    /// name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TSFORM_API_URL") {
            self.api_base_url = url;
        }
        if let Some(rows) = lookup("TSFORM_ROWS_PER_PAGE") {
            self.rows_per_page = rows.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "TSFORM_ROWS_PER_PAGE".to_string(),
                message: format!("'{}' is not a number", rows),
            })?;
        }
        if let Some(url) = lookup("TSFORM_SUBMIT_URL") {
            self.submit_url = Some(url).filter(|u| !u.is_empty());
        }
        if let Some(path) = lookup("TSFORM_LOG_FILE") {
            self.log_file = PathBuf::from(path);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::Invalid {
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.api_base_url.trim().is_empty() {
            return Err(invalid("api_base_url", "must not be empty"));
        }
        if self.rows_per_page == 0 {
            return Err(invalid("rows_per_page", "must be greater than zero"));
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(invalid("rows_per_page_options", "options must be greater than zero"));
        }
        if !self.rows_per_page_options.contains(&self.rows_per_page) {
            return Err(invalid("rows_per_page", "must be one of rows_per_page_options"));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }
}
