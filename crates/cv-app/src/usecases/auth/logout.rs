use std::sync::Arc;

use cv_core::ports::SessionStorePort;
use tracing::info;

use super::AuthError;

/// Forget the signed-in user. An admin session, if any, is kept.
pub struct Logout {
    store: Arc<dyn SessionStorePort>,
}

impl Logout {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        let mut snapshot = self.store.load().await?;
        if snapshot.user.take().is_none() {
            return Ok(());
        }
        self.store.save(&snapshot).await?;
        info!("user signed out");
        Ok(())
    }
}
