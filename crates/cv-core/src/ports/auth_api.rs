use crate::auth::{AdminSession, UserSession};
use crate::ports::ApiError;
use crate::security::SecretString;

#[async_trait::async_trait]
pub trait AuthApiPort: Send + Sync {
    async fn login(&self, email: &str, password: &SecretString) -> Result<UserSession, ApiError>;

    async fn admin_login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AdminSession, ApiError>;
}
