//! Use case for signing a user in
//! 用户登录用例

use std::sync::Arc;

use cv_core::ports::{AuthApiPort, SessionStorePort};
use cv_core::registration::normalize_email;
use cv_core::{SecretString, UserSession};
use tracing::{info, info_span, Instrument};

use super::AuthError;

/// Use case for signing a user in.
///
/// ## Behavior / 行为
/// - Normalizes the email the same way signup does
/// - Calls the login endpoint
/// - Persists the returned user, keeping any admin session untouched
pub struct Login {
    api: Arc<dyn AuthApiPort>,
    store: Arc<dyn SessionStorePort>,
}

impl Login {
    pub fn new(api: Arc<dyn AuthApiPort>, store: Arc<dyn SessionStorePort>) -> Self {
        Self { api, store }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: SecretString,
    ) -> Result<UserSession, AuthError> {
        let email = normalize_email(email);
        let span = info_span!("usecase.login.execute", email = %email);

        async {
            if email.is_empty() || password.is_empty() {
                return Err(AuthError::MissingCredentials);
            }

            let user = self.api.login(&email, &password).await?;

            let mut snapshot = self.store.load().await?;
            snapshot.user = Some(user.clone());
            self.store.save(&snapshot).await?;

            info!(user_id = %user.id, "user signed in");
            Ok(user)
        }
        .instrument(span)
        .await
    }
}
