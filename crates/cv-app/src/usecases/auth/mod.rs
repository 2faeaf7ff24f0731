//! Sign-in use cases.
//!
//! 登录、登出与会话守卫。

mod admin_login;
mod current_session;
mod login;
mod logout;

pub use admin_login::AdminLogin;
pub use current_session::CurrentSession;
pub use login::Login;
pub use logout::Logout;

use cv_core::ports::{ApiError, SessionStoreError};

const LOGIN_FALLBACK: &str = "Invalid credentials";

/// Errors produced by the sign-in use cases.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter your email and password.")]
    MissingCredentials,

    /// The backend refused the credentials.
    #[error("{0}")]
    Rejected(String),

    #[error("Could not connect to the server. Please try again.")]
    Transport(String),

    #[error("This account does not have admin access.")]
    NotAdmin,

    #[error("You are not signed in.")]
    NotSignedIn,

    #[error("session storage failed: {0}")]
    Store(#[from] SessionStoreError),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { .. } => {
                Self::Rejected(err.server_message().unwrap_or(LOGIN_FALLBACK).to_string())
            }
            ApiError::Transport(detail) => Self::Transport(detail),
        }
    }
}
