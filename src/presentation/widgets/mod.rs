mod crawl_view;
mod input;
mod nav_bar;
mod progress_bar;
mod status_bar;

pub use crawl_view::{CrawlAnimation, CrawlView};
pub use input::TextInput;
pub use nav_bar::{
    NavBar, NavBarStyle, NavButton, button_row, format_key, hit_test_row, render_buttons,
};
pub use progress_bar::ProgressBar;
pub use status_bar::StatusBar;
