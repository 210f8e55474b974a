//! UI screens.

mod app;
mod deck_screen;
mod deck_surface;
mod help_popup;

pub use app::App;
pub use deck_screen::DeckScreen;
pub use deck_surface::{DeckSurface, SurfaceOptions};
pub use help_popup::HelpPopup;
