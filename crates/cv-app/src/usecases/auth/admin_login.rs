//! Use case for signing an administrator in
//! 管理员登录用例

use std::sync::Arc;

use cv_core::ports::{AuthApiPort, SessionStorePort};
use cv_core::registration::normalize_email;
use cv_core::{AdminSession, SecretString};
use tracing::{info, info_span, warn, Instrument};

use super::AuthError;

/// Use case for signing an administrator in.
///
/// A successful backend answer is not enough: the returned account must carry
/// the `admin` role, otherwise nothing is persisted.
pub struct AdminLogin {
    api: Arc<dyn AuthApiPort>,
    store: Arc<dyn SessionStorePort>,
}

impl AdminLogin {
    pub fn new(api: Arc<dyn AuthApiPort>, store: Arc<dyn SessionStorePort>) -> Self {
        Self { api, store }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: SecretString,
    ) -> Result<AdminSession, AuthError> {
        let email = normalize_email(email);
        let span = info_span!("usecase.admin_login.execute", email = %email);

        async {
            if email.is_empty() || password.is_empty() {
                return Err(AuthError::MissingCredentials);
            }

            let admin = self.api.admin_login(&email, &password).await?;
            if !admin.is_admin() {
                warn!(role = %admin.role, "admin login refused for non-admin role");
                return Err(AuthError::NotAdmin);
            }

            let mut snapshot = self.store.load().await?;
            snapshot.admin = Some(admin.clone());
            self.store.save(&snapshot).await?;

            info!(admin_id = %admin.id, "admin signed in");
            Ok(admin)
        }
        .instrument(span)
        .await
    }
}
