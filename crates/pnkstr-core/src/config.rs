use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::{max_results_violation, AppConfig};

const DEFAULT_QUERIES: &str = "PNKSTR,$PNKSTR";
const DEFAULT_API_BASE_URL: &str = "https://api.x.com/2/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let bearer_token = require("TWITTER_BEARER_TOKEN")?;

    let queries = parse_queries(&or_default("PNKSTR_QUERIES", DEFAULT_QUERIES));
    if queries.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "PNKSTR_QUERIES".to_string(),
            reason: "no non-blank queries".to_string(),
        });
    }

    let max_results = parse_u32("PNKSTR_MAX_RESULTS", "100")?;
    if let Some(reason) = max_results_violation(max_results) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PNKSTR_MAX_RESULTS".to_string(),
            reason,
        });
    }

    let data_dir = PathBuf::from(or_default("PNKSTR_DATA_DIR", "data"));
    let log_dir = PathBuf::from(or_default("PNKSTR_LOG_DIR", "logs"));
    let api_base_url = or_default("PNKSTR_API_BASE_URL", DEFAULT_API_BASE_URL);
    let request_timeout_secs = parse_u64("PNKSTR_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PNKSTR_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("PNKSTR_USER_AGENT", "pnkstr/0.1 (ppu-pilot)");
    let log_level = or_default("PNKSTR_LOG_LEVEL", "info");

    Ok(AppConfig {
        bearer_token,
        queries,
        max_results,
        data_dir,
        log_dir,
        api_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Split a comma-separated query list, trimming each entry and dropping blanks.
fn parse_queries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
