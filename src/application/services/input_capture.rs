//! Free-text response capture for the designated input screen.

use tracing::info;

/// Collects responses for the lifetime of the session.
#[derive(Debug, Default)]
pub struct InputCapture {
    responses: Vec<String>,
}

impl InputCapture {
    /// Creates an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a response. Returns the confirmation, or `None` for blank input.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        info!(length = value.chars().count(), "Response captured");
        self.responses.push(value.to_string());
        Some(confirmation_message(value))
    }

    /// Every response in the order it was saved.
    #[must_use]
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Most recent response.
    #[must_use]
    pub fn last_response(&self) -> Option<&str> {
        self.responses.last().map(String::as_str)
    }
}

/// Text shown under the field after a save.
#[must_use]
pub fn confirmation_message(value: &str) -> String {
    format!("Idea saved: \"{value}\" - thanks.")
}
