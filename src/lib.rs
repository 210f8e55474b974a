//! Slidedeck - a terminal slideshow navigator.
//!
//! Presents a deck of screens one at a time with keyboard and mouse
//! navigation, a progress bar, a response field on one screen and a
//! credits crawl on the last one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing navigation services.
pub mod application;
/// Domain layer containing screens, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration, deck loading and host adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "slidedeck";
