use crate::ids::UserId;
use crate::investment::Investment;
use crate::plan::{Plan, PurchaseRequest};
use crate::ports::ApiError;

#[async_trait::async_trait]
pub trait PlanApiPort: Send + Sync {
    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError>;

    async fn my_investments(&self, user_id: &UserId) -> Result<Vec<Investment>, ApiError>;

    /// Returns the backend's confirmation message, if it sent one.
    async fn purchase(&self, request: &PurchaseRequest) -> Result<Option<String>, ApiError>;
}
