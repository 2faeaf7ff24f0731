use std::sync::Arc;

use cv_core::ports::SessionStorePort;
use cv_core::{AdminSession, SessionSnapshot, UserSession};

use super::AuthError;

/// Read access to the persisted sessions, plus the guards protected commands use.
///
/// 受保护命令使用的会话守卫。
pub struct CurrentSession {
    store: Arc<dyn SessionStorePort>,
}

impl CurrentSession {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self { store }
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, AuthError> {
        Ok(self.store.load().await?)
    }

    pub async fn require_user(&self) -> Result<UserSession, AuthError> {
        self.snapshot().await?.user.ok_or(AuthError::NotSignedIn)
    }

    /// An admin record whose role is not `admin` counts as signed out.
    pub async fn require_admin(&self) -> Result<AdminSession, AuthError> {
        self.snapshot()
            .await?
            .admin
            .filter(AdminSession::is_admin)
            .ok_or(AuthError::NotAdmin)
    }
}
