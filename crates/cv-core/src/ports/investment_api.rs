use crate::ids::{InvestmentId, UserId};
use crate::investment::Investment;
use crate::ports::ApiError;

#[async_trait::async_trait]
pub trait InvestmentApiPort: Send + Sync {
    async fn get(&self, id: &InvestmentId) -> Result<Investment, ApiError>;

    /// Returns the backend's confirmation message.
    async fn claim_payout(
        &self,
        investment_id: &InvestmentId,
        user_id: &UserId,
    ) -> Result<String, ApiError>;
}
