//! Notification polling.
//!
//! 定时拉取通知并推送给界面。

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use cv_core::notification::NotificationFeed;
use cv_core::ports::{ApiError, NotificationApiPort, NotificationSink};
use cv_core::UserId;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::periodic::PeriodicTask;

struct PollState {
    api: Arc<dyn NotificationApiPort>,
    sink: Arc<dyn NotificationSink>,
    user_id: UserId,
    latest: Mutex<Option<NotificationFeed>>,
}

impl PollState {
    /// Fetch once; on failure the previous feed stays in place.
    async fn poll_once(&self) -> Option<NotificationFeed> {
        let span = info_span!("usecase.notifications.poll", user_id = %self.user_id);
        async {
            match self.api.fetch(&self.user_id).await {
                Ok(feed) => {
                    debug!(
                        count = feed.list.len(),
                        unread = feed.unread_count,
                        "notifications fetched"
                    );
                    *self.latest.lock().await = Some(feed.clone());
                    self.sink.publish(feed.clone()).await;
                    Some(feed)
                }
                Err(err) => {
                    warn!(error = %err, "notification fetch failed, keeping last feed");
                    self.latest.lock().await.clone()
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Polls the notification endpoint for one signed-in user.
pub struct NotificationPoller {
    state: Arc<PollState>,
    interval: Duration,
    task: Mutex<Option<PeriodicTask>>,
}

impl NotificationPoller {
    pub fn new(
        api: Arc<dyn NotificationApiPort>,
        sink: Arc<dyn NotificationSink>,
        user_id: UserId,
        interval: Duration,
    ) -> Self {
        Self {
            state: Arc::new(PollState {
                api,
                sink,
                user_id,
                latest: Mutex::new(None),
            }),
            interval,
            task: Mutex::new(None),
        }
    }

    /// Fetch immediately, then keep polling every interval until [`stop`](Self::stop).
    pub async fn start(&self) -> Option<NotificationFeed> {
        let first = self.state.poll_once().await;

        let state = Arc::clone(&self.state);
        let task = PeriodicTask::spawn("notifications.poll", self.interval, move || {
            let state = Arc::clone(&state);
            async move {
                state.poll_once().await;
                ControlFlow::Continue(())
            }
        });
        *self.task.lock().await = Some(task);
        first
    }

    /// One fetch without scheduling anything.
    pub async fn refresh(&self) -> Option<NotificationFeed> {
        self.state.poll_once().await
    }

    pub async fn latest(&self) -> Option<NotificationFeed> {
        self.state.latest.lock().await.clone()
    }

    /// Mark everything read. Returns `false` when there was nothing unread.
    pub async fn mark_all_read(&self) -> Result<bool, ApiError> {
        let unread = self
            .state
            .latest
            .lock()
            .await
            .as_ref()
            .map_or(0, |feed| feed.unread_count);
        if unread == 0 {
            return Ok(false);
        }

        self.state.api.mark_read(&self.state.user_id).await?;

        let updated = {
            let mut latest = self.state.latest.lock().await;
            latest.as_mut().map(|feed| {
                feed.mark_all_read();
                feed.clone()
            })
        };
        if let Some(feed) = updated {
            self.state.sink.publish(feed).await;
        }
        info!(user_id = %self.state.user_id, unread, "notifications marked read");
        Ok(true)
    }

    pub async fn stop(&self) {
        if let Some(task) = self.task.lock().await.take() {
            task.stop();
        }
    }

    pub async fn is_running(&self) -> bool {
        self.task
            .lock()
            .await
            .as_ref()
            .is_some_and(PeriodicTask::is_running)
    }
}
