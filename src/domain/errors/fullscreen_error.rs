//! Fullscreen service error types.

use thiserror::Error;

/// Fullscreen request error variants.
#[derive(Debug, Error)]
pub enum FullscreenError {
    /// Writing the escape sequence failed.
    #[error("terminal rejected presentation request: {0}")]
    Terminal(#[from] std::io::Error),
}
