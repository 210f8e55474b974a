//! Lifecycle of the credits crawl on the final screen.
//!
//! The crawl swaps the final screen's resting content for an animated
//! wrapper, hides the surrounding chrome shortly after, and puts everything
//! back once the animation has run its course. Navigating away restores
//! synchronously; the timer path and the manual path both end in
//! [`CrawlManager::restore`], which is idempotent.

use std::time::Duration;

use tracing::{debug, info};

use crate::domain::ports::{FiredTimer, RenderSurface, TimerEvent, TimerHandle, TimerPort};
use crate::domain::screen::ScreenContent;

/// Length of the scroll animation.
pub const DEFAULT_CRAWL_DURATION: Duration = Duration::from_secs(220);
/// Slack added after the animation before restoring.
pub const DEFAULT_RESTORE_BUFFER: Duration = Duration::from_millis(300);
/// Delay between starting the crawl and hiding the chrome.
pub const DEFAULT_CHROME_DELAY: Duration = Duration::from_millis(200);

/// Timing knobs of the crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlTiming {
    /// Length of the scroll.
    pub duration: Duration,
    /// Extra wait after the scroll before restoring.
    pub restore_buffer: Duration,
    /// Wait before the chrome is hidden.
    pub chrome_delay: Duration,
}

impl CrawlTiming {
    /// Time from start until automatic restoration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.duration.saturating_add(self.restore_buffer)
    }
}

impl Default for CrawlTiming {
    fn default() -> Self {
        Self {
            duration: DEFAULT_CRAWL_DURATION,
            restore_buffer: DEFAULT_RESTORE_BUFFER,
            chrome_delay: DEFAULT_CHROME_DELAY,
        }
    }
}

#[derive(Debug, Default)]
struct CrawlState {
    started: bool,
    original_content: Option<Vec<String>>,
    pending_restore: Option<TimerHandle>,
}

/// Owns the one-shot, cancellable, replayable crawl of one screen.
#[derive(Debug)]
pub struct CrawlManager {
    screen_index: usize,
    timing: CrawlTiming,
    state: Option<CrawlState>,
    pending_chrome: Option<TimerHandle>,
}

impl CrawlManager {
    /// Creates a manager for the crawl on `screen_index`.
    #[must_use]
    pub const fn new(screen_index: usize, timing: CrawlTiming) -> Self {
        Self {
            screen_index,
            timing,
            state: None,
            pending_chrome: None,
        }
    }

    /// Index of the crawl screen.
    #[must_use]
    pub const fn screen_index(&self) -> usize {
        self.screen_index
    }

    /// Configured timing.
    #[must_use]
    pub const fn timing(&self) -> CrawlTiming {
        self.timing
    }

    /// Checks whether the crawl is currently running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.started)
    }

    /// Handle of the outstanding restore timer.
    #[must_use]
    pub fn pending_restore(&self) -> Option<TimerHandle> {
        self.state.as_ref().and_then(|s| s.pending_restore)
    }

    /// Content captured on the first play of the session.
    #[must_use]
    pub fn original_content(&self) -> Option<&[String]> {
        self.state
            .as_ref()
            .and_then(|s| s.original_content.as_deref())
    }

    /// Starts the crawl unless it is already running.
    pub fn start<S, T>(&mut self, surface: &mut S, timer: &mut T)
    where
        S: RenderSurface + ?Sized,
        T: TimerPort + ?Sized,
    {
        let index = self.screen_index;
        let Some(current) = surface.content(index) else {
            return;
        };
        let lines = current.lines().to_vec();

        let state = self.state.get_or_insert_with(CrawlState::default);
        if state.started {
            debug!(screen = index, "Crawl already running");
            return;
        }
        state.started = true;
        state
            .original_content
            .get_or_insert_with(|| lines.clone());

        surface.set_content(index, ScreenContent::Crawl(lines));

        if let Some(handle) = self.pending_chrome.take() {
            timer.cancel(handle);
        }
        self.pending_chrome = Some(timer.schedule(self.timing.chrome_delay, TimerEvent::HideChrome));

        if let Some(handle) = state.pending_restore.take() {
            timer.cancel(handle);
        }
        let handle = timer.schedule(self.timing.total(), TimerEvent::RestoreCrawl);
        state.pending_restore = Some(handle);

        info!(screen = index, restore = %handle, "Crawl started");
    }

    /// Cancels any pending restoration and restores now if mid-animation.
    pub fn cancel_and_restore<S, T>(&mut self, surface: &mut S, timer: &mut T)
    where
        S: RenderSurface + ?Sized,
        T: TimerPort + ?Sized,
    {
        if let Some(handle) = self.state.as_mut().and_then(|s| s.pending_restore.take()) {
            timer.cancel(handle);
        }

        if surface
            .content(self.screen_index)
            .is_some_and(ScreenContent::is_crawl)
        {
            debug!(screen = self.screen_index, "Crawl interrupted");
            self.restore(surface, timer);
        }
    }

    /// Puts the captured content back and makes the crawl replayable.
    pub fn restore<S, T>(&mut self, surface: &mut S, timer: &mut T)
    where
        S: RenderSurface + ?Sized,
        T: TimerPort + ?Sized,
    {
        let index = self.screen_index;
        if !surface.contains(index) {
            return;
        }

        let state = self.state.get_or_insert_with(CrawlState::default);
        let original = state.original_content.clone().unwrap_or_default();
        surface.set_content(index, ScreenContent::Text(original));
        surface.set_chrome_hidden(false);
        state.started = false;

        if let Some(handle) = state.pending_restore.take() {
            timer.cancel(handle);
        }
        if let Some(handle) = self.pending_chrome.take() {
            timer.cancel(handle);
        }

        info!(screen = index, "Crawl restored");
    }

    /// Applies a fired timer. Returns whether it was still current.
    pub fn on_timer<S, T>(
        &mut self,
        surface: &mut S,
        timer: &mut T,
        fired: FiredTimer,
        current_index: usize,
    ) -> bool
    where
        S: RenderSurface + ?Sized,
        T: TimerPort + ?Sized,
    {
        match fired.event {
            TimerEvent::RestoreCrawl => {
                let Some(state) = self
                    .state
                    .as_mut()
                    .filter(|s| s.pending_restore == Some(fired.handle))
                else {
                    debug!(handle = %fired.handle, "Ignoring stale crawl restore");
                    return false;
                };
                state.pending_restore = None;
                self.restore(surface, timer);
                true
            }
            TimerEvent::HideChrome => {
                if self.pending_chrome != Some(fired.handle) {
                    debug!(handle = %fired.handle, "Ignoring stale chrome timer");
                    return false;
                }
                self.pending_chrome = None;
                if self.is_started() && current_index == self.screen_index {
                    surface.set_chrome_hidden(true);
                }
                true
            }
            TimerEvent::AdvanceAfterSubmit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{ManualTimer, MockSurface};

    const LAST: usize = 10;

    fn setup() -> (CrawlManager, MockSurface, ManualTimer) {
        (
            CrawlManager::new(LAST, CrawlTiming::default()),
            MockSurface::with_screens(LAST + 1),
            ManualTimer::new(),
        )
    }

    fn fire_all(
        crawl: &mut CrawlManager,
        surface: &mut MockSurface,
        timer: &mut ManualTimer,
        by: Duration,
        current: usize,
    ) {
        for fired in timer.advance(by) {
            crawl.on_timer(surface, timer, fired, current);
        }
    }

    #[test]
    fn test_start_swaps_in_crawl_and_schedules_timers() {
        let (mut crawl, mut surface, mut timer) = setup();

        crawl.start(&mut surface, &mut timer);

        assert!(crawl.is_started());
        assert_eq!(
            surface.content(LAST),
            Some(&ScreenContent::Crawl(vec!["screen 10".to_string()]))
        );
        assert_eq!(
            timer.pending_events(),
            vec![TimerEvent::HideChrome, TimerEvent::RestoreCrawl]
        );
        assert_eq!(crawl.original_content(), Some(&["screen 10".to_string()][..]));
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut crawl, mut surface, mut timer) = setup();

        crawl.start(&mut surface, &mut timer);
        let first = crawl.pending_restore();
        crawl.start(&mut surface, &mut timer);

        assert_eq!(crawl.pending_restore(), first);
        assert_eq!(timer.pending.len(), 2);
    }

    #[test]
    fn test_chrome_hidden_after_delay_only_on_final_screen() {
        let (mut crawl, mut surface, mut timer) = setup();
        crawl.start(&mut surface, &mut timer);

        fire_all(&mut crawl, &mut surface, &mut timer, DEFAULT_CHROME_DELAY, LAST);
        assert!(surface.chrome_hidden);

        let (mut crawl, mut surface, mut timer) = setup();
        crawl.start(&mut surface, &mut timer);
        fire_all(&mut crawl, &mut surface, &mut timer, DEFAULT_CHROME_DELAY, 3);
        assert!(!surface.chrome_hidden);
    }

    #[test]
    fn test_auto_restore_after_total_duration() {
        let (mut crawl, mut surface, mut timer) = setup();
        crawl.start(&mut surface, &mut timer);

        fire_all(&mut crawl, &mut surface, &mut timer, DEFAULT_CRAWL_DURATION, LAST);
        assert!(crawl.is_started());

        fire_all(&mut crawl, &mut surface, &mut timer, DEFAULT_RESTORE_BUFFER, LAST);
        assert!(!crawl.is_started());
        assert_eq!(crawl.pending_restore(), None);
        assert!(!surface.chrome_hidden);
        assert_eq!(
            surface.content(LAST),
            Some(&ScreenContent::Text(vec!["screen 10".to_string()]))
        );
    }

    #[test]
    fn test_cancel_and_restore_mid_animation() {
        let (mut crawl, mut surface, mut timer) = setup();
        crawl.start(&mut surface, &mut timer);
        let handle = crawl.pending_restore().unwrap();

        crawl.cancel_and_restore(&mut surface, &mut timer);

        assert!(!crawl.is_started());
        assert!(timer.cancelled.contains(&handle));
        assert!(timer.pending.is_empty());
        assert!(!surface.content(LAST).unwrap().is_crawl());
    }

    #[test]
    fn test_stale_restore_fire_is_noop() {
        let (mut crawl, mut surface, mut timer) = setup();
        crawl.start(&mut surface, &mut timer);
        let stale = FiredTimer {
            handle: crawl.pending_restore().unwrap(),
            event: TimerEvent::RestoreCrawl,
        };
        crawl.cancel_and_restore(&mut surface, &mut timer);
        let chrome_changes = surface.chrome_changes.len();

        assert!(!crawl.on_timer(&mut surface, &mut timer, stale, LAST));
        assert_eq!(surface.chrome_changes.len(), chrome_changes);
    }

    #[test]
    fn test_cancel_without_crawl_leaves_content_alone() {
        let (mut crawl, mut surface, mut timer) = setup();
        surface.set_content(LAST, ScreenContent::Text(vec!["edited".into()]));

        crawl.cancel_and_restore(&mut surface, &mut timer);

        assert_eq!(surface.content(LAST).unwrap().lines(), ["edited"]);
        assert!(surface.chrome_changes.is_empty());
    }

    #[test]
    fn test_replay_reuses_first_capture() {
        let (mut crawl, mut surface, mut timer) = setup();
        crawl.start(&mut surface, &mut timer);
        crawl.restore(&mut surface, &mut timer);

        surface.set_content(LAST, ScreenContent::Text(vec!["changed".into()]));
        crawl.start(&mut surface, &mut timer);
        assert!(crawl.is_started());
        crawl.restore(&mut surface, &mut timer);

        assert_eq!(surface.content(LAST).unwrap().lines(), ["screen 10"]);
    }

    #[test]
    fn test_missing_screen_is_noop() {
        let mut crawl = CrawlManager::new(LAST, CrawlTiming::default());
        let mut surface = MockSurface::with_screens(LAST + 1).without_screen(LAST);
        let mut timer = ManualTimer::new();

        crawl.start(&mut surface, &mut timer);
        crawl.restore(&mut surface, &mut timer);

        assert!(!crawl.is_started());
        assert!(timer.pending.is_empty());
        assert!(surface.chrome_changes.is_empty());
    }

    #[test]
    fn test_timing_total() {
        let timing = CrawlTiming::default();
        assert_eq!(timing.total(), Duration::from_millis(220_300));
    }
}
