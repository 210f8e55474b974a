//! Application configuration.

/// Configuration model and defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Configuration file loading.
pub mod storage;

pub use app_config::{AppConfig, CrawlConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigStore};
