//! Plan catalogue, plan purchases and the user's investment list.
//!
//! 投资计划列表、购买与我的投资。

mod catalogue;
mod purchase;

pub use catalogue::{ListPlans, MyInvestments};
pub use purchase::{PurchasePlan, PurchaseReceipt};

use cv_core::plan::PlanAmountError;
use cv_core::ports::ApiError;

use crate::usecases::wallet::WalletError;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error(transparent)]
    Amount(#[from] PlanAmountError),

    /// Balance or platform wallet lookup failed.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// The backend refused the request.
    #[error("{0}")]
    Rejected(String),

    #[error("Server communication error")]
    Transport(String),
}

impl PlanError {
    pub(crate) fn from_api(err: ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Rejected { .. } => {
                Self::Rejected(err.server_message().unwrap_or(fallback).to_string())
            }
            ApiError::Transport(detail) => Self::Transport(detail),
        }
    }
}
