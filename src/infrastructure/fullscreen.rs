//! Terminal presentation mode and mouse capture.

use std::io::Write;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use tracing::{info, warn};

use crate::domain::errors::FullscreenError;
use crate::domain::ports::FullscreenPort;

/// Fullscreen for a terminal: the app drops its header and the "Present"
/// button while active, and the window title announces the presentation.
pub struct PresentationMode<W: Write> {
    writer: W,
    title: String,
    active: bool,
}

impl PresentationMode<std::io::Stdout> {
    /// Presentation mode for the process terminal.
    #[must_use]
    pub fn stdout(title: impl Into<String>) -> Self {
        Self::new(std::io::stdout(), title)
    }
}

impl<W: Write> PresentationMode<W> {
    /// Wraps a writer; `title` is the deck title restored on exit.
    pub fn new(writer: W, title: impl Into<String>) -> Self {
        Self {
            writer,
            title: title.into(),
            active: false,
        }
    }

    /// Escape sequences written so far go here.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

/// Turns terminal mouse reporting on or off.
///
/// Failures are logged and reported as `false` rather than returned.
pub fn set_mouse_capture<W: Write>(writer: &mut W, enabled: bool) -> bool {
    let result = if enabled {
        execute!(writer, EnableMouseCapture)
    } else {
        execute!(writer, DisableMouseCapture)
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, enabled, "Failed to change mouse capture");
            false
        }
    }
}

impl<W: Write> FullscreenPort for PresentationMode<W> {
    fn request(&mut self) -> Result<(), FullscreenError> {
        if self.active {
            return Ok(());
        }
        let title = format!("{} (presenting)", self.title);
        execute!(self.writer, SetTitle(title))?;
        self.active = true;
        info!("Entered presentation mode");
        Ok(())
    }

    fn exit(&mut self) -> Result<bool, FullscreenError> {
        if !self.active {
            return Ok(false);
        }
        let title = self.title.clone();
        execute!(self.writer, SetTitle(title))?;
        self.active = false;
        info!("Left presentation mode");
        Ok(true)
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
