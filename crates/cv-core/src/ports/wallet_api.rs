use crate::ids::UserId;
use crate::ports::ApiError;
use crate::wallet::{
    AdminWallet, DashboardSummary, DepositRecord, DepositRequest, WithdrawalRequest,
};

/// Balance, deposits and withdrawals.
///
/// Deposits and withdrawals only create records for an admin to review; the
/// returned string is the backend's confirmation message, if it sent one.
#[async_trait::async_trait]
pub trait WalletApiPort: Send + Sync {
    async fn dashboard(&self, user_id: &UserId) -> Result<DashboardSummary, ApiError>;

    async fn admin_wallets(&self) -> Result<Vec<AdminWallet>, ApiError>;

    async fn log_deposit(&self, request: &DepositRequest) -> Result<Option<String>, ApiError>;

    async fn deposit_history(&self, user_id: &UserId) -> Result<Vec<DepositRecord>, ApiError>;

    async fn withdraw(&self, request: &WithdrawalRequest) -> Result<Option<String>, ApiError>;
}
