use std::sync::Arc;

use cv_core::ports::WalletApiPort;
use cv_core::wallet::{AdminWallet, DepositRecord, DepositRequest};
use cv_core::{UserId, WalletId};
use tracing::{info, info_span, Instrument};

use super::WalletError;

const DEPOSIT_CONFIRMATION: &str = "Admin will verify your transfer shortly.";
const DEPOSIT_FALLBACK: &str = "Deposit could not be logged.";
const WALLETS_FALLBACK: &str = "Could not load the deposit wallets.";
const HISTORY_FALLBACK: &str = "Could not load your deposits.";

/// A logged deposit: where the user should send the funds, and the backend's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositReceipt {
    pub wallet: AdminWallet,
    pub amount: f64,
    pub message: String,
}

/// Announce a crypto transfer to one of the platform wallets.
///
/// ## Behavior / 行为
/// - A non-positive amount is refused before any backend call
/// - Without an explicit wallet the first platform wallet is used
/// - The deposit stays pending until an admin confirms the transfer
pub struct LogDeposit {
    api: Arc<dyn WalletApiPort>,
}

impl LogDeposit {
    pub fn new(api: Arc<dyn WalletApiPort>) -> Self {
        Self { api }
    }

    pub async fn wallets(&self) -> Result<Vec<AdminWallet>, WalletError> {
        self.api
            .admin_wallets()
            .await
            .map_err(|e| WalletError::from_api(e, WALLETS_FALLBACK))
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        amount: f64,
        wallet_id: Option<&WalletId>,
    ) -> Result<DepositReceipt, WalletError> {
        let span = info_span!("usecase.log_deposit.execute", user_id = %user_id);
        async {
            if amount.is_nan() || amount <= 0.0 {
                return Err(WalletError::MissingDepositAmount);
            }
            let wallet = pick_wallet(self.wallets().await?, wallet_id)?;

            let request = DepositRequest::to_wallet(user_id.clone(), amount, &wallet);
            let message = self
                .api
                .log_deposit(&request)
                .await
                .map_err(|e| WalletError::from_api(e, DEPOSIT_FALLBACK))?;
            info!(amount, method = %request.method, "deposit logged");

            Ok(DepositReceipt {
                wallet,
                amount,
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEPOSIT_CONFIRMATION.to_string()),
            })
        }
        .instrument(span)
        .await
    }
}

/// `wallet_id` must name one of `wallets`; `None` takes the first.
pub(crate) fn pick_wallet(
    wallets: Vec<AdminWallet>,
    wallet_id: Option<&WalletId>,
) -> Result<AdminWallet, WalletError> {
    match wallet_id {
        Some(id) => wallets
            .into_iter()
            .find(|w| &w.id == id)
            .ok_or_else(|| WalletError::UnknownWallet(id.to_string())),
        None => wallets.into_iter().next().ok_or(WalletError::NoDepositWallet),
    }
}

/// The user's logged deposits with their review status.
pub struct DepositHistory {
    api: Arc<dyn WalletApiPort>,
}

impl DepositHistory {
    pub fn new(api: Arc<dyn WalletApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Vec<DepositRecord>, WalletError> {
        self.api
            .deposit_history(user_id)
            .await
            .map_err(|e| WalletError::from_api(e, HISTORY_FALLBACK))
    }
}
