//! Cancellable periodic task.
//!
//! One abstraction for every fixed-interval job the client runs (resend
//! cooldown, notification polling). The task is tied to the lifetime of its
//! owner: dropping the handle cancels it.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

pub struct PeriodicTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl PeriodicTask {
    /// Spawn `tick` every `period`, first call one period from now.
    ///
    /// The task ends when `tick` returns `ControlFlow::Break(())`, on [`stop`](Self::stop),
    /// or when the handle is dropped. Must be called from within a Tokio runtime.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tick().await.is_break() {
                    debug!(task = name, "periodic task finished");
                    break;
                }
            }
        });
        debug!(task = name, period_ms = period.as_millis() as u64, "periodic task started");
        Self { name, handle }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stop(&self) {
        if !self.handle.is_finished() {
            self.handle.abort();
            debug!(task = self.name, "periodic task stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
