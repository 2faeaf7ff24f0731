use std::sync::Arc;

use cv_core::ports::WalletApiPort;
use cv_core::wallet::{WithdrawalRequest, DEFAULT_WITHDRAWAL_NETWORK, MIN_WALLET_ADDRESS_LEN};
use cv_core::UserId;
use tracing::{info, info_span, Instrument};

use super::WalletError;

const WITHDRAW_CONFIRMATION: &str = "Your withdrawal is pending admin approval.";
const WITHDRAW_FALLBACK: &str = "Withdrawal could not be requested.";
const BALANCE_FALLBACK: &str = "Could not load your balance.";

/// Ask for a payout of part of the balance to an external wallet.
///
/// ## Behavior / 行为
/// - The amount is checked against a freshly loaded balance
/// - Addresses shorter than [`MIN_WALLET_ADDRESS_LEN`] are refused
/// - Both checks run before the withdrawal endpoint is called
pub struct RequestWithdrawal {
    api: Arc<dyn WalletApiPort>,
}

impl RequestWithdrawal {
    pub fn new(api: Arc<dyn WalletApiPort>) -> Self {
        Self { api }
    }

    /// `network` defaults to [`DEFAULT_WITHDRAWAL_NETWORK`].
    pub async fn execute(
        &self,
        user_id: &UserId,
        amount: f64,
        wallet_address: &str,
        network: Option<&str>,
    ) -> Result<String, WalletError> {
        let span = info_span!("usecase.withdraw.execute", user_id = %user_id);
        async {
            if amount.is_nan() || amount <= 0.0 {
                return Err(WalletError::MissingWithdrawalAmount);
            }
            let balance = self
                .api
                .dashboard(user_id)
                .await
                .map_err(|e| WalletError::from_api(e, BALANCE_FALLBACK))?
                .balance;
            if amount > balance {
                return Err(WalletError::InsufficientBalance { balance });
            }
            let wallet_address = wallet_address.trim();
            if wallet_address.chars().count() < MIN_WALLET_ADDRESS_LEN {
                return Err(WalletError::InvalidAddress);
            }

            let request = WithdrawalRequest {
                user_id: user_id.clone(),
                amount,
                wallet_address: wallet_address.to_string(),
                network: network
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or(DEFAULT_WITHDRAWAL_NETWORK)
                    .to_string(),
            };
            let message = self
                .api
                .withdraw(&request)
                .await
                .map_err(|e| WalletError::from_api(e, WITHDRAW_FALLBACK))?;
            info!(amount, network = %request.network, "withdrawal requested");
            Ok(message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| WITHDRAW_CONFIRMATION.to_string()))
        }
        .instrument(span)
        .await
    }
}
