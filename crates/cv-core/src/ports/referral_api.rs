use crate::ids::UserId;
use crate::ports::ApiError;
use crate::referral::ReferralStats;

#[async_trait::async_trait]
pub trait ReferralApiPort: Send + Sync {
    async fn stats(&self, user_id: &UserId) -> Result<ReferralStats, ApiError>;
}
