//! Balance, deposit and withdrawal use cases.
//!
//! 余额、充值与提现。

mod dashboard;
mod deposit;
mod withdraw;

pub use dashboard::ShowDashboard;
pub(crate) use deposit::pick_wallet;
pub use deposit::{DepositHistory, DepositReceipt, LogDeposit};
pub use withdraw::RequestWithdrawal;

use cv_core::ports::ApiError;
use cv_core::wallet::MIN_WALLET_ADDRESS_LEN;

/// Errors produced by the wallet use cases.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Please enter a deposit amount.")]
    MissingDepositAmount,

    #[error("Please enter a withdrawal amount.")]
    MissingWithdrawalAmount,

    #[error("No deposit wallet is available right now.")]
    NoDepositWallet,

    #[error("Unknown deposit wallet: {0}")]
    UnknownWallet(String),

    #[error("Insufficient balance")]
    InsufficientBalance { balance: f64 },

    /// Shorter than [`MIN_WALLET_ADDRESS_LEN`].
    #[error("Please enter a valid wallet address")]
    InvalidAddress,

    /// The backend refused the request.
    #[error("{0}")]
    Rejected(String),

    #[error("Server communication error")]
    Transport(String),
}

impl WalletError {
    pub(crate) fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Rejected { .. } => {
                Self::Rejected(err.server_message().unwrap_or(fallback).to_string())
            }
            ApiError::Transport(detail) => Self::Transport(detail),
        }
    }
}
