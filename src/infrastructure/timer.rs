use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::ports::{FiredTimer, TimerEvent, TimerHandle, TimerPort};

/// Timer service backed by sleeping tokio tasks.
///
/// Elapsed timers are delivered on the channel given at construction, to be
/// routed back into the controller by the event loop.
pub struct TokioTimer {
    next_id: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    fired_tx: mpsc::UnboundedSender<FiredTimer>,
}

impl TokioTimer {
    /// Creates a timer that reports on `fired_tx`.
    #[must_use]
    pub fn new(fired_tx: mpsc::UnboundedSender<FiredTimer>) -> Self {
        Self {
            next_id: 0,
            tasks: HashMap::new(),
            fired_tx,
        }
    }

    /// Creates a timer together with the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<FiredTimer>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Number of timers scheduled and not yet finished or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|t| !t.is_finished()).count()
    }
}

impl TimerPort for TokioTimer {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let tx = self.fired_tx.clone();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(FiredTimer { handle, event });
        });
        self.tasks.insert(handle, task);

        debug!(%handle, ?event, delay_ms = delay.as_millis(), "Timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            debug!(%handle, "Timer cancelled");
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
