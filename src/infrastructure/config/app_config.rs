//! Application configuration.

use crate::application::services::CrawlTiming;
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub(crate) const APP_NAME: &str = "slidedeck";
pub(crate) const APP_QUALIFIER: &str = "dev";
pub(crate) const APP_ORGANIZATION: &str = "slidedeck";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse clicks on navigation buttons.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Deck file to present. The built-in deck is used when unset.
    #[serde(default)]
    pub deck: Option<PathBuf>,

    /// Custom keybindings, e.g. `"Ctrl+n" = "Next"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Credits crawl timing.
    #[serde(default)]
    pub crawl: CrawlConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Show the deck's aside panel next to each screen.
    #[serde(default = "default_true")]
    pub show_aside: bool,

    /// Announce the screen number on every key press.
    #[serde(default = "default_true")]
    pub announce: bool,

    /// How long an announcement stays visible, in milliseconds.
    #[serde(default = "default_announce_duration_ms")]
    pub announce_duration_ms: u64,

    /// Delay before moving on after a response is saved, in milliseconds.
    #[serde(default = "default_submit_advance_delay_ms")]
    pub submit_advance_delay_ms: u64,

    /// Enable `TachyonFX` effects on the crawl.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl UiConfig {
    /// Announcement lifetime.
    #[must_use]
    pub const fn announce_duration(&self) -> Duration {
        Duration::from_millis(self.announce_duration_ms)
    }

    /// Pause before advancing after a saved response.
    #[must_use]
    pub const fn submit_advance_delay(&self) -> Duration {
        Duration::from_millis(self.submit_advance_delay_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_aside: true,
            announce: true,
            announce_duration_ms: default_announce_duration_ms(),
            submit_advance_delay_ms: default_submit_advance_delay_ms(),
            enable_animations: true,
        }
    }
}

/// Credits crawl timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Scroll animation length in seconds.
    #[serde(default = "default_crawl_duration_secs")]
    pub duration_secs: u64,

    /// Extra wait after the animation before restoring, in milliseconds.
    #[serde(default = "default_restore_buffer_ms")]
    pub restore_buffer_ms: u64,

    /// Delay before the aside and footer are hidden, in milliseconds.
    #[serde(default = "default_chrome_delay_ms")]
    pub chrome_delay_ms: u64,
}

impl CrawlConfig {
    /// Timing handed to the crawl lifecycle.
    #[must_use]
    pub const fn timing(&self) -> CrawlTiming {
        CrawlTiming {
            duration: Duration::from_secs(self.duration_secs),
            restore_buffer: Duration::from_millis(self.restore_buffer_ms),
            chrome_delay: Duration::from_millis(self.chrome_delay_ms),
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_crawl_duration_secs(),
            restore_buffer_ms: default_restore_buffer_ms(),
            chrome_delay_ms: default_chrome_delay_ms(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "#ffe86c".to_string()
}

fn default_true() -> bool {
    true
}

fn default_announce_duration_ms() -> u64 {
    800
}

fn default_submit_advance_delay_ms() -> u64 {
    320
}

fn default_crawl_duration_secs() -> u64 {
    220
}

fn default_restore_buffer_ms() -> u64 {
    300
}

fn default_chrome_delay_ms() -> u64 {
    200
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    ///
    /// `--config` is consumed by [`super::ConfigStore`] before this runs.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(deck) = args.deck {
            self.deck = Some(deck);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(show_progress) = args.show_progress {
            self.ui.show_progress = show_progress;
        }
        if let Some(announce) = args.announce {
            self.ui.announce = announce;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(duration_secs) = args.crawl_duration_secs {
            self.crawl.duration_secs = duration_secs;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("slidedeck.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            deck: None,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            crawl: CrawlConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}
