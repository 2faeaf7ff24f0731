use crate::auth::PasswordChange;
use crate::ids::UserId;
use crate::ports::ApiError;

#[async_trait::async_trait]
pub trait AccountApiPort: Send + Sync {
    /// Returns the backend's confirmation message, if it sent one.
    async fn change_password(
        &self,
        user_id: &UserId,
        change: &PasswordChange,
    ) -> Result<Option<String>, ApiError>;
}
