use serde::{Deserialize, Serialize};

/// Registration error types.
///
/// 注册流程错误类型。The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RegistrationError {
    #[error("Please enter your email address.")]
    EmailEmpty,
    #[error("The verification code must be {expected} characters long.")]
    CodeLength { expected: usize },
    #[error("Please fill in your full name and password.")]
    ProfileIncomplete,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    /// The backend answered `success: false`.
    #[error("{message}")]
    Rejected { message: String },
    /// Network failure, non-2xx status or an unreadable body.
    #[error("Could not connect to the server. Please try again.")]
    Transport { detail: String },
}

impl RegistrationError {
    /// Client-side validation failures never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmailEmpty
                | Self::CodeLength { .. }
                | Self::ProfileIncomplete
                | Self::PasswordMismatch
        )
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
