//! Short-lived status line announcements.

use std::time::{Duration, Instant};

/// Default lifetime of a screen-reader style announcement.
pub const DEFAULT_ANNOUNCEMENT_DURATION: Duration = Duration::from_millis(800);

/// A message shown in the status line until it expires.
#[derive(Debug, Clone)]
pub struct Announcement {
    /// Text to show.
    pub message: String,
    /// When the announcement was made; expiry counts from here.
    pub created_at: Instant,
    /// How long the announcement stays visible.
    pub duration: Duration,
}

impl Announcement {
    /// Creates an announcement with the default duration.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: DEFAULT_ANNOUNCEMENT_DURATION,
        }
    }

    /// Overrides the lifetime.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Checks expiry against an explicit clock reading.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Checks expiry against the current time.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}
