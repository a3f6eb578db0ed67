//! Delay scheduling
//!
//! Every fixed delay in the panel flows goes through a [`Scheduler`] so
//! tests can drive time by hand instead of waiting on real timers.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Source of delays for panel flows
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Resolve after `duration` has elapsed on this scheduler's clock.
    async fn sleep(&self, duration: Duration);
}

/// Scheduler backed by tokio timers
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

struct Timer {
    deadline: Duration,
    wake: oneshot::Sender<()>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    timers: Vec<Timer>,
}

/// Scheduler whose clock only moves when [`ManualScheduler::advance`] is called
///
/// Sleeps register a timer at `now + duration`; advancing past the deadline
/// wakes the sleeper. Zero-length sleeps resolve immediately.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of sleeps still waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.state.lock().timers.len()
    }

    /// Move the clock forward and wake every timer that is now due.
    ///
    /// Timers fire in deadline order. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let mut due = {
            let mut state = self.state.lock();
            state.now += by;
            let now = state.now;
            let (due, waiting): (Vec<_>, Vec<_>) =
                state.timers.drain(..).partition(|t| t.deadline <= now);
            state.timers = waiting;
            due
        };
        due.sort_by_key(|t| t.deadline);
        let fired = due.len();
        for timer in due {
            // A dropped sleeper is not an error.
            let _ = timer.wake.send(());
        }
        fired
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}

#[async_trait]
impl Scheduler for ManualScheduler {
    async fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        let rx = {
            let mut state = self.state.lock();
            let (tx, rx) = oneshot::channel();
            let deadline = state.now + duration;
            state.timers.push(Timer { deadline, wake: tx });
            rx
        };
        let _ = rx.await;
    }
}
