/// Status line announcements.
pub mod announcer;
/// Final-screen crawl lifecycle.
pub mod crawl_manager;
/// Response capture for the input screen.
pub mod input_capture;
/// Screen navigation.
pub mod screen_controller;

pub use announcer::Announcer;
pub use crawl_manager::{CrawlManager, CrawlTiming};
pub use input_capture::InputCapture;
pub use screen_controller::{ControllerSettings, ScreenController};
