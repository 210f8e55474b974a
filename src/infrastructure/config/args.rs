use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags; every one overrides the matching file setting.
#[derive(Debug, Parser)]
#[command(
    name = "slidedeck",
    version,
    about = "A terminal slide deck presenter",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Deck file to present.
    #[arg(short, long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse clicks on navigation buttons.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Show the progress bar.
    #[arg(long)]
    pub show_progress: Option<bool>,

    /// Announce the screen number on every key press.
    #[arg(long)]
    pub announce: Option<bool>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Credits crawl length in seconds.
    #[arg(long, value_name = "SECS")]
    pub crawl_duration_secs: Option<u64>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
