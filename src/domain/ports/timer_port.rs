//! Timer service port definition.

use std::time::Duration;

/// Identifies one scheduled timer. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Deferred work the navigation core can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Crawl finished; put the credits back at rest.
    RestoreCrawl,
    /// Crawl is under way; hide aside and footer.
    HideChrome,
    /// A response was saved; move to the following screen.
    AdvanceAfterSubmit,
}

/// A timer that has elapsed and must be routed back to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    /// Handle returned by `schedule`.
    pub handle: TimerHandle,
    /// Event scheduled under that handle.
    pub event: TimerEvent,
}

/// Port for cancellable deferred callbacks.
pub trait TimerPort {
    /// Schedules `event` to fire after `delay`.
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Cancels a pending timer. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[cfg(test)]
#[allow(dead_code, missing_docs)]
pub mod mock {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScheduledTimer {
        pub handle: TimerHandle,
        pub due_at: Duration,
        pub event: TimerEvent,
    }

    /// Virtual-clock timer driven explicitly by tests.
    #[derive(Debug, Default)]
    pub struct ManualTimer {
        next_id: u64,
        now: Duration,
        pub pending: Vec<ScheduledTimer>,
        pub cancelled: Vec<TimerHandle>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending_events(&self) -> Vec<TimerEvent> {
            self.pending.iter().map(|t| t.event).collect()
        }

        pub fn is_pending(&self, handle: TimerHandle) -> bool {
            self.pending.iter().any(|t| t.handle == handle)
        }

        /// Advances the virtual clock, returning due timers in firing order.
        pub fn advance(&mut self, by: Duration) -> Vec<FiredTimer> {
            self.now += by;
            let now = self.now;
            let mut due: Vec<ScheduledTimer> = Vec::new();
            self.pending.retain(|t| {
                if t.due_at <= now {
                    due.push(*t);
                    false
                } else {
                    true
                }
            });
            due.sort_by_key(|t| (t.due_at, t.handle));
            due.into_iter()
                .map(|t| FiredTimer {
                    handle: t.handle,
                    event: t.event,
                })
                .collect()
        }
    }

    impl TimerPort for ManualTimer {
        fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
            self.next_id += 1;
            let handle = TimerHandle(self.next_id);
            self.pending.push(ScheduledTimer {
                handle,
                due_at: self.now + delay,
                event,
            });
            handle
        }

        fn cancel(&mut self, handle: TimerHandle) {
            let before = self.pending.len();
            self.pending.retain(|t| t.handle != handle);
            if self.pending.len() != before {
                self.cancelled.push(handle);
            }
        }
    }
}
