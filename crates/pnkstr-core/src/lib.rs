//! Shared configuration and record types for the PNKSTR search pilot.

pub mod app_config;
pub mod config;
pub mod records;

pub use app_config::{AppConfig, MAX_RESULTS_RANGE};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use records::NormalizedRecord;
