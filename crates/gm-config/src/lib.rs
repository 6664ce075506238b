mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "gym.db";
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 900;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 604_800;
const MIN_JWT_SECRET_BYTES: usize = 32;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
