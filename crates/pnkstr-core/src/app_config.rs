use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Page sizes the recent-search endpoint accepts.
pub const MAX_RESULTS_RANGE: RangeInclusive<u32> = 10..=100;

#[derive(Clone)]
pub struct AppConfig {
    pub bearer_token: String,
    pub queries: Vec<String>,
    pub max_results: u32,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl AppConfig {
    /// Apply command-line overrides on top of the env-derived configuration.
    ///
    /// An empty `queries` slice keeps the configured queries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `max_results` lies outside
    /// [`MAX_RESULTS_RANGE`] or every override query is blank.
    pub fn with_overrides(
        mut self,
        queries: &[String],
        max_results: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if !queries.is_empty() {
            let cleaned: Vec<String> = queries
                .iter()
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect();
            if cleaned.is_empty() {
                return Err(ConfigError::InvalidValue {
                    name: "--query".to_string(),
                    reason: "at least one non-blank query is required".to_string(),
                });
            }
            self.queries = cleaned;
        }

        if let Some(max_results) = max_results {
            if let Some(reason) = max_results_violation(max_results) {
                return Err(ConfigError::InvalidValue {
                    name: "--max-results".to_string(),
                    reason,
                });
            }
            self.max_results = max_results;
        }

        Ok(self)
    }
}

/// Describes why `value` is not an acceptable page size, if it isn't.
pub(crate) fn max_results_violation(value: u32) -> Option<String> {
    if MAX_RESULTS_RANGE.contains(&value) {
        None
    } else {
        Some(format!(
            "{value} is outside {}..={}",
            MAX_RESULTS_RANGE.start(),
            MAX_RESULTS_RANGE.end()
        ))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bearer_token", &"[redacted]")
            .field("queries", &self.queries)
            .field("max_results", &self.max_results)
            .field("data_dir", &self.data_dir)
            .field("log_dir", &self.log_dir)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
