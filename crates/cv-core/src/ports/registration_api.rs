use crate::ports::ApiError;
use crate::registration::RegistrationRequest;

/// The three backend endpoints behind the signup flow.
///
/// Implementations must not retry: a failure is reported to the user, who
/// decides whether to submit again.
#[async_trait::async_trait]
pub trait RegistrationApiPort: Send + Sync {
    /// Email a one-time code to `email` (already normalized).
    async fn request_otp(&self, email: &str) -> Result<(), ApiError>;

    /// Check `code` exactly as typed against the code issued for `email`.
    async fn verify_otp(&self, email: &str, code: &str) -> Result<(), ApiError>;

    /// Create the account.
    async fn complete_registration(&self, request: &RegistrationRequest) -> Result<(), ApiError>;
}
