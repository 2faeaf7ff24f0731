//! Account settings and the referral program.
//!
//! 账户设置与邀请计划。

mod change_password;
mod referrals;

pub use change_password::ChangePassword;
pub use referrals::{ReferralOverview, ReferralSummary};

use cv_core::auth::PasswordChangeError;
use cv_core::ports::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error(transparent)]
    Invalid(#[from] PasswordChangeError),

    /// The backend refused the request.
    #[error("{0}")]
    Rejected(String),

    #[error("Server connection failed")]
    Transport(String),
}

impl AccountError {
    fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Rejected { .. } => {
                Self::Rejected(err.server_message().unwrap_or(fallback).to_string())
            }
            ApiError::Transport(detail) => Self::Transport(detail),
        }
    }
}
