//! Domain layer with core presentation entities and port definitions.

/// Transient accessibility announcements.
pub mod announcement;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Navigation state and index arithmetic.
pub mod navigation;
/// Port definitions.
pub mod ports;
/// Screen and deck entities.
pub mod screen;

pub use announcement::Announcement;
pub use errors::{DeckError, FullscreenError};
pub use navigation::NavigationState;
pub use ports::{FiredTimer, FullscreenPort, RenderSurface, TimerEvent, TimerHandle, TimerPort};
pub use screen::{Deck, Screen, ScreenContent};
