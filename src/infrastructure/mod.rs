//! Infrastructure layer with host-environment adapters.

/// Application configuration.
pub mod config;
/// Deck file loading.
pub mod deck_loader;
/// Terminal presentation mode and mouse capture.
pub mod fullscreen;
/// Tokio-backed timer service.
pub mod timer;

pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel};
pub use deck_loader::DeckLoader;
pub use fullscreen::{PresentationMode, set_mouse_capture};
pub use timer::TokioTimer;
