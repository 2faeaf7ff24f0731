use std::sync::Arc;

use cv_core::ports::WalletApiPort;
use cv_core::wallet::DashboardSummary;
use cv_core::UserId;
use tracing::{debug, info_span, Instrument};

use super::WalletError;

const DASHBOARD_FALLBACK: &str = "Could not load your dashboard.";

/// Balance and recent transactions for the signed-in user.
pub struct ShowDashboard {
    api: Arc<dyn WalletApiPort>,
}

impl ShowDashboard {
    pub fn new(api: Arc<dyn WalletApiPort>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<DashboardSummary, WalletError> {
        let span = info_span!("usecase.dashboard.execute", user_id = %user_id);
        async {
            let summary = self
                .api
                .dashboard(user_id)
                .await
                .map_err(|e| WalletError::from_api(e, DASHBOARD_FALLBACK))?;
            debug!(
                balance = summary.balance,
                transactions = summary.transactions.len(),
                "dashboard loaded"
            );
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}
