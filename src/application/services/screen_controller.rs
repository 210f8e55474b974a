//! Screen navigation controller.
//!
//! Owns the current index and every side effect tied to entering or leaving
//! a screen: visibility, progress, navigation affordances, input focus and
//! the credits crawl on the final screen.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::crawl_manager::{CrawlManager, CrawlTiming};
use super::input_capture::InputCapture;
use crate::domain::navigation::{NavigationState, clamp_index, progress_fraction};
use crate::domain::ports::{FiredTimer, RenderSurface, TimerEvent, TimerHandle, TimerPort};

/// Delay between saving a response and moving on.
pub const DEFAULT_SUBMIT_ADVANCE_DELAY: Duration = Duration::from_millis(320);

/// Construction parameters for [`ScreenController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Screen whose response field gets focus on entry.
    pub input_screen: Option<usize>,
    /// Timing of the final-screen crawl.
    pub crawl: CrawlTiming,
    /// Pause between a saved response and the move forward.
    pub submit_advance_delay: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            input_screen: None,
            crawl: CrawlTiming::default(),
            submit_advance_delay: DEFAULT_SUBMIT_ADVANCE_DELAY,
        }
    }
}

/// Drives a [`RenderSurface`] through the deck.
///
/// Every navigation goes through [`ScreenController::go_to`]; deferred
/// work is scheduled on the [`TimerPort`] and comes back through
/// [`ScreenController::on_timer`].
pub struct ScreenController<S, T> {
    surface: S,
    timer: T,
    navigation: NavigationState,
    crawl: CrawlManager,
    input: InputCapture,
    input_screen: Option<usize>,
    submit_advance_delay: Duration,
    pending_advance: Option<TimerHandle>,
}

impl<S: RenderSurface, T: TimerPort> ScreenController<S, T> {
    /// Creates a controller. Nothing is shown until the first `go_to`.
    #[must_use]
    pub fn new(surface: S, timer: T, settings: ControllerSettings) -> Self {
        let final_index = surface.screen_count().saturating_sub(1);

        Self {
            surface,
            timer,
            navigation: NavigationState::new(),
            crawl: CrawlManager::new(final_index, settings.crawl),
            input: InputCapture::new(),
            input_screen: settings.input_screen,
            submit_advance_delay: settings.submit_advance_delay,
            pending_advance: None,
        }
    }

    /// Shows the screen nearest to `target`.
    ///
    /// Returns the index now on display, or `None` if the screen is missing
    /// from the surface, in which case nothing changes.
    pub fn go_to(&mut self, target: i64) -> Option<usize> {
        let count = self.surface.screen_count();
        let Some(index) = clamp_index(target, count) else {
            warn!(target, "No screens to navigate");
            return None;
        };
        if !self.surface.contains(index) {
            warn!(target, index, "Screen not found");
            return None;
        }

        self.surface.set_chrome_hidden(false);
        self.surface.hide_all();
        self.crawl
            .cancel_and_restore(&mut self.surface, &mut self.timer);
        self.surface.show(index);
        self.navigation.set_current_index(index);
        self.surface
            .set_progress(progress_fraction(index, count) * 100.0);

        if self.input_screen == Some(index) {
            self.surface.focus_input();
        }

        self.surface
            .set_navigation_enabled(index != 0, index + 1 != count);

        if index == self.crawl.screen_index() {
            self.crawl.start(&mut self.surface, &mut self.timer);
        }

        debug!(target, index, "Showing screen");
        Some(index)
    }

    /// Moves one screen forward, clamped at the end.
    pub fn next(&mut self) -> Option<usize> {
        self.go_to(self.offset(1))
    }

    /// Moves one screen back, clamped at the start.
    pub fn prev(&mut self) -> Option<usize> {
        self.go_to(self.offset(-1))
    }

    /// Jumps to the final screen.
    pub fn go_to_end(&mut self) -> Option<usize> {
        self.go_to(i64::MAX)
    }

    /// Saves a response and schedules the move to the following screen.
    pub fn submit_input(&mut self, text: &str) -> Option<String> {
        let confirmation = self.input.submit(text)?;
        self.surface.set_confirmation(&confirmation);
        self.surface.clear_input();

        if let Some(handle) = self.pending_advance.take() {
            self.timer.cancel(handle);
        }
        self.pending_advance = Some(
            self.timer
                .schedule(self.submit_advance_delay, TimerEvent::AdvanceAfterSubmit),
        );

        Some(confirmation)
    }

    /// Routes a fired timer to its owner. Stale handles are ignored.
    pub fn on_timer(&mut self, fired: FiredTimer) {
        match fired.event {
            TimerEvent::AdvanceAfterSubmit => {
                if self.pending_advance == Some(fired.handle) {
                    self.pending_advance = None;
                    info!("Advancing after saved response");
                    self.next();
                } else {
                    debug!(handle = %fired.handle, "Ignoring stale advance timer");
                }
            }
            TimerEvent::RestoreCrawl | TimerEvent::HideChrome => {
                let current = self.navigation.current_index();
                self.crawl
                    .on_timer(&mut self.surface, &mut self.timer, fired, current);
            }
        }
    }

    /// Index of the screen on display.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    /// Number of screens on the surface.
    #[must_use]
    pub fn screen_count(&self) -> usize {
        self.surface.screen_count()
    }

    /// Fraction of the deck seen so far, `(current_index + 1) / N`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress_fraction(self.current_index(), self.screen_count())
    }

    /// Configured input screen, if any.
    #[must_use]
    pub const fn input_screen(&self) -> Option<usize> {
        self.input_screen
    }

    /// Checks whether the input screen is on display.
    #[must_use]
    pub fn on_input_screen(&self) -> bool {
        self.input_screen == Some(self.current_index())
    }

    /// Checks whether the crawl screen is on display.
    #[must_use]
    pub fn on_final_screen(&self) -> bool {
        self.current_index() == self.crawl.screen_index()
    }

    /// Crawl lifecycle of the final screen.
    #[must_use]
    pub const fn crawl(&self) -> &CrawlManager {
        &self.crawl
    }

    /// Responses saved this session.
    #[must_use]
    pub const fn input_capture(&self) -> &InputCapture {
        &self.input
    }

    /// The driven surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for input editing and animation ticks.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The timer port.
    #[must_use]
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable timer access.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn offset(&self, delta: i64) -> i64 {
        i64::try_from(self.current_index())
            .unwrap_or(i64::MAX)
            .saturating_add(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::crawl_manager::{
        DEFAULT_CHROME_DELAY, DEFAULT_CRAWL_DURATION,
    };
    use crate::domain::ports::mocks::{ManualTimer, MockSurface};
    use crate::domain::screen::ScreenContent;
    use test_case::test_case;

    type Controller = ScreenController<MockSurface, ManualTimer>;

    fn controller(count: usize) -> Controller {
        let settings = ControllerSettings {
            input_screen: Some(8),
            ..ControllerSettings::default()
        };
        let mut controller =
            ScreenController::new(MockSurface::with_screens(count), ManualTimer::new(), settings);
        controller.go_to(0);
        controller
    }

    fn advance(controller: &mut Controller, by: Duration) {
        let fired = controller.timer_mut().advance(by);
        for timer in fired {
            controller.on_timer(timer);
        }
    }

    #[test_case(-5, 0 ; "negative")]
    #[test_case(999, 10 ; "past_end")]
    #[test_case(0, 0 ; "first")]
    #[test_case(5, 5 ; "middle")]
    #[test_case(10, 10 ; "last")]
    fn test_go_to_clamps(target: i64, expected: usize) {
        let mut c = controller(11);
        assert_eq!(c.go_to(target), Some(expected));
        assert_eq!(c.current_index(), expected);
    }

    #[test]
    fn test_exactly_one_screen_visible() {
        let mut c = controller(11);
        for target in [3, 7, 0, 10, 2] {
            c.go_to(target);
            assert_eq!(c.surface().visible_screens(), vec![c.current_index()]);
        }
    }

    #[test]
    fn test_progress_tracks_index() {
        let mut c = controller(11);
        for target in 0..11 {
            c.go_to(target);
            let expected = (c.current_index() + 1) as f64 / 11.0;
            assert!((c.progress() - expected).abs() < f64::EPSILON);
            let percent = c.surface().progress.unwrap();
            assert!((percent - expected * 100.0).abs() < 1e-9);
        }
    }

    #[test_case(0, false, true ; "first_screen")]
    #[test_case(4, true, true ; "middle_screen")]
    #[test_case(10, true, false ; "last_screen")]
    fn test_affordances(target: i64, backward: bool, forward: bool) {
        let mut c = controller(11);
        c.go_to(target);
        assert_eq!(c.surface().backward_enabled, backward);
        assert_eq!(c.surface().forward_enabled, forward);
    }

    #[test]
    fn test_single_screen_disables_both_affordances() {
        let c = controller(1);
        assert!(!c.surface().backward_enabled);
        assert!(!c.surface().forward_enabled);
    }

    #[test]
    fn test_input_screen_requests_focus() {
        let mut c = controller(11);
        assert_eq!(c.surface().focus_requests, 0);
        c.go_to(8);
        assert_eq!(c.surface().focus_requests, 1);
        assert!(c.on_input_screen());
    }

    #[test]
    fn test_next_ten_times_starts_crawl_then_prev_restores() {
        let mut c = controller(11);
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.current_index(), 10);
        assert!(c.crawl().is_started());
        assert!(c.surface().content(10).unwrap().is_crawl());
        let restore = c.crawl().pending_restore().unwrap();

        c.prev();

        assert_eq!(c.current_index(), 9);
        assert!(!c.crawl().is_started());
        assert!(!c.timer().is_pending(restore));
        assert_eq!(
            c.surface().content(10),
            Some(&ScreenContent::Text(vec!["screen 10".to_string()]))
        );
    }

    #[test]
    fn test_next_at_end_stays_put() {
        let mut c = controller(11);
        c.go_to(10);
        let restore = c.crawl().pending_restore();
        c.next();
        assert_eq!(c.current_index(), 10);
        // Re-entering the final screen replays the crawl.
        assert!(c.crawl().is_started());
        assert_ne!(c.crawl().pending_restore(), restore);
    }

    #[test]
    fn test_prev_at_start_stays_put() {
        let mut c = controller(11);
        c.prev();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_crawl_hides_chrome_then_auto_restores() {
        let mut c = controller(11);
        c.go_to_end();
        assert!(!c.surface().chrome_hidden);

        advance(&mut c, DEFAULT_CHROME_DELAY);
        assert!(c.surface().chrome_hidden);

        advance(&mut c, DEFAULT_CRAWL_DURATION);
        assert!(c.crawl().is_started());

        advance(&mut c, CrawlTiming::default().restore_buffer);
        assert!(!c.crawl().is_started());
        assert!(!c.surface().chrome_hidden);
        assert!(!c.surface().content(10).unwrap().is_crawl());
    }

    #[test]
    fn test_leaving_before_chrome_delay_keeps_chrome() {
        let mut c = controller(11);
        c.go_to_end();
        c.prev();
        advance(&mut c, DEFAULT_CHROME_DELAY);
        assert!(!c.surface().chrome_hidden);
    }

    #[test]
    fn test_restore_then_reenter_replays() {
        let mut c = controller(11);
        c.go_to_end();
        advance(&mut c, CrawlTiming::default().total());
        assert!(!c.crawl().is_started());

        c.prev();
        c.next();
        assert!(c.crawl().is_started());
    }

    #[test]
    fn test_missing_screen_aborts_without_mutation() {
        let surface = MockSurface::with_screens(11).without_screen(5);
        let mut c = ScreenController::new(surface, ManualTimer::new(), ControllerSettings::default());
        c.go_to(3);
        let before = c.surface().chrome_changes.len();

        assert_eq!(c.go_to(5), None);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.surface().visible_screens(), vec![3]);
        assert_eq!(c.surface().chrome_changes.len(), before);
    }

    #[test]
    fn test_empty_surface_is_noop() {
        let mut c = ScreenController::new(
            MockSurface::with_screens(0),
            ManualTimer::new(),
            ControllerSettings::default(),
        );
        assert_eq!(c.next(), None);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_submit_input_confirms_clears_and_advances() {
        let mut c = controller(11);
        c.go_to(8);

        let message = c.submit_input("Pair on the hard parts").unwrap();

        assert!(message.contains("Pair on the hard parts"));
        assert_eq!(c.surface().confirmation.as_deref(), Some(message.as_str()));
        assert_eq!(c.surface().input_clears, 1);
        assert_eq!(c.current_index(), 8);

        advance(&mut c, DEFAULT_SUBMIT_ADVANCE_DELAY);
        assert_eq!(c.current_index(), 9);
    }

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut c = controller(11);
        c.go_to(8);
        assert_eq!(c.submit_input("   "), None);
        assert_eq!(c.surface().input_clears, 0);
        assert!(c.timer().pending.is_empty());
    }

    #[test]
    fn test_repeated_submit_advances_once() {
        let mut c = controller(11);
        c.go_to(8);
        c.submit_input("first");
        c.submit_input("second");

        advance(&mut c, DEFAULT_SUBMIT_ADVANCE_DELAY);
        assert_eq!(c.current_index(), 9);
        assert_eq!(c.input_capture().responses(), ["first", "second"]);
    }
}
