//! Domain error types.

mod deck_error;
mod fullscreen_error;

pub use deck_error::DeckError;
pub use fullscreen_error::FullscreenError;
