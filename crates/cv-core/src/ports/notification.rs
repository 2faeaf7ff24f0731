use crate::ids::UserId;
use crate::notification::NotificationFeed;
use crate::ports::ApiError;

#[async_trait::async_trait]
pub trait NotificationApiPort: Send + Sync {
    async fn fetch(&self, user_id: &UserId) -> Result<NotificationFeed, ApiError>;

    async fn mark_read(&self, user_id: &UserId) -> Result<(), ApiError>;
}

/// Receives every feed update produced by the poller.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn publish(&self, feed: NotificationFeed);
}
