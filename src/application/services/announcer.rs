//! Status line announcements ("Screen 4").

use std::time::{Duration, Instant};

use crate::domain::Announcement;
use crate::domain::announcement::DEFAULT_ANNOUNCEMENT_DURATION;

/// Holds the latest announcement until it expires.
///
/// A new announcement replaces the one on display, so holding a key down
/// never builds a backlog of stale screen numbers.
#[derive(Debug)]
pub struct Announcer {
    current: Option<Announcement>,
    default_duration: Duration,
    enabled: bool,
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new(DEFAULT_ANNOUNCEMENT_DURATION)
    }
}

impl Announcer {
    /// Creates an announcer whose messages live for `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
            enabled: true,
        }
    }

    /// Turns every later `announce` into a no-op.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Replaces the current announcement.
    pub fn announce(&mut self, message: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.current = Some(Announcement::new(message).with_duration(self.default_duration));
    }

    /// Announces a zero-based screen index as "Screen N".
    pub fn announce_screen(&mut self, index: usize) {
        self.announce(format!("Screen {}", index + 1));
    }

    /// Drops the announcement once it has expired.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|a| a.is_expired_at(now)) {
            self.current = None;
        }
    }

    /// The announcement on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_flow() {
        let mut announcer = Announcer::default();

        announcer.announce_screen(2);
        assert_eq!(announcer.current().unwrap().message, "Screen 3");

        announcer.tick();
        assert!(announcer.current().is_some());
    }

    #[test]
    fn test_rapid_announcements_show_the_latest() {
        let mut announcer = Announcer::new(Duration::from_millis(50));

        for index in 0..10 {
            announcer.announce_screen(index);
        }
        announcer.tick();

        assert_eq!(announcer.current().unwrap().message, "Screen 10");
    }

    #[test]
    fn test_expires_from_creation_time() {
        let mut announcer = Announcer::new(Duration::from_millis(800));
        announcer.announce("Screen 1");
        let created = announcer.current().unwrap().created_at;

        announcer.tick_at(created + Duration::from_millis(799));
        assert!(announcer.current().is_some());

        announcer.tick_at(created + Duration::from_millis(800));
        assert!(announcer.current().is_none());
    }

    #[test]
    fn test_new_announcement_restarts_expiry() {
        let mut announcer = Announcer::new(Duration::from_millis(800));
        announcer.announce("Screen 1");
        let first = announcer.current().unwrap().created_at;

        announcer.announce("Screen 2");
        let second = announcer.current().unwrap().created_at;
        announcer.tick_at(second + Duration::from_millis(400));

        assert!(second >= first);
        assert_eq!(announcer.current().unwrap().message, "Screen 2");
    }

    #[test]
    fn test_disabled_announcer_stays_silent() {
        let mut announcer = Announcer::default().disabled();
        announcer.announce_screen(0);
        assert!(announcer.current().is_none());
    }
}
