//! Colors derived from the configured accent.

/// HSL color conversions.
pub mod adapter;
mod service;

pub use service::Theme;
