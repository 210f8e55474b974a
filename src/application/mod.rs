//! Application layer with the navigation core.

/// Navigation, crawl, capture and announcement services.
pub mod services;

pub use services::{
    Announcer, ControllerSettings, CrawlManager, CrawlTiming, InputCapture, ScreenController,
};
