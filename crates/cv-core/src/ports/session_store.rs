use crate::auth::SessionSnapshot;
use crate::ports::errors::SessionStoreError;

/// Typed persistence of the signed-in sessions.
///
/// Requirements:
/// - `load` on a store that was never written returns an empty snapshot
/// - `save` replaces the whole snapshot atomically
#[async_trait::async_trait]
pub trait SessionStorePort: Send + Sync {
    async fn load(&self) -> Result<SessionSnapshot, SessionStoreError>;

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError>;

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.save(&SessionSnapshot::default()).await
    }
}
