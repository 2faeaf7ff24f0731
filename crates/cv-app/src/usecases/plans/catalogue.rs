use std::sync::Arc;

use cv_core::investment::Investment;
use cv_core::plan::Plan;
use cv_core::ports::PlanApiPort;
use cv_core::UserId;
use tracing::debug;

use super::PlanError;

const PLANS_FALLBACK: &str = "Could not load the plans.";
const INVESTMENTS_FALLBACK: &str = "Could not load your investments.";

pub struct ListPlans {
    api: Arc<dyn PlanApiPort>,
}

impl ListPlans {
    pub fn new(api: Arc<dyn PlanApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self) -> Result<Vec<Plan>, PlanError> {
        let plans = self
            .api
            .list_plans()
            .await
            .map_err(|e| PlanError::from_api(e, PLANS_FALLBACK))?;
        debug!(count = plans.len(), "plans loaded");
        Ok(plans)
    }
}

/// Every investment of the user, newest state as reported by the backend.
pub struct MyInvestments {
    api: Arc<dyn PlanApiPort>,
}

impl MyInvestments {
    pub fn new(api: Arc<dyn PlanApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Vec<Investment>, PlanError> {
        self.api
            .my_investments(user_id)
            .await
            .map_err(|e| PlanError::from_api(e, INVESTMENTS_FALLBACK))
    }
}
