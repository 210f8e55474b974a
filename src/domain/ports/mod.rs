//! Ports the navigation core drives; adapters live in infrastructure.

mod fullscreen_port;
mod render_surface;
mod timer_port;

pub use fullscreen_port::FullscreenPort;
pub use render_surface::RenderSurface;
pub use timer_port::{FiredTimer, TimerEvent, TimerHandle, TimerPort};
