use crate::registration::RegistrationView;

/// Outbound notifications from the registration flow to whatever renders it.
#[async_trait::async_trait]
pub trait RegistrationEventPort: Send + Sync {
    async fn emit_state_changed(&self, view: RegistrationView);

    /// The account exists; the UI should move to the login entry point.
    async fn emit_completed(&self, email: String);
}
