use std::sync::Arc;

use cv_core::auth::PasswordChange;
use cv_core::ports::AccountApiPort;
use cv_core::{SecretString, UserId};
use tracing::{info, info_span, Instrument};

use super::AccountError;

const CHANGE_CONFIRMATION: &str = "Password updated successfully.";
const CHANGE_FALLBACK: &str = "Password could not be changed.";

/// Replace the signed-in user's password.
///
/// The three fields are validated locally first; the backend checks the
/// current password.
pub struct ChangePassword {
    api: Arc<dyn AccountApiPort>,
}

impl ChangePassword {
    pub fn new(api: Arc<dyn AccountApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        current: SecretString,
        new: SecretString,
        confirmation: SecretString,
    ) -> Result<String, AccountError> {
        let span = info_span!("usecase.change_password.execute", user_id = %user_id);
        async {
            let change = PasswordChange::new(current, new, confirmation)?;
            let message = self
                .api
                .change_password(user_id, &change)
                .await
                .map_err(|e| AccountError::from_api(e, CHANGE_FALLBACK))?;
            info!("password changed");
            Ok(message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| CHANGE_CONFIRMATION.to_string()))
        }
        .instrument(span)
        .await
    }
}
