use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_VENUE_API_BASE: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1/venues";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub venue_api: VenueApiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl VenueApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_timeout_secs() -> u64 { 10 }
fn default_connect_timeout_secs() -> u64 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory of the log file; empty disables file logging
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }
fn default_log_directory() -> String { DEFAULT_LOG_DIRECTORY.to_string() }
fn default_log_file_name() -> String { "dopc.log".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DOPC__)
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DOPC__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default("venue_api.base_url", DEFAULT_VENUE_API_BASE)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())?
        .set_default("logging.directory", default_log_directory())?
        .set_default("logging.file_name", default_log_file_name())
}

fn environment() -> Environment {
    Environment::with_prefix("DOPC")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
