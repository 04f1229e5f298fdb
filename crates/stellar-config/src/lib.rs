mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 800;
const DEFAULT_RESET_LATENCY_MS: u64 = 1500;
const DEFAULT_DATABASE_FILENAME: &str = "stellar.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_FILENAME: &str = "stellar.log";

#[cfg(test)]
mod tests;
