//! Use case for following an investment until maturity
//! 投资到期倒计时用例

use std::sync::Arc;

use cv_core::investment::{Investment, InvestmentStatus, MaturityCountdown};
use cv_core::ports::{ApiError, ClockPort, InvestmentApiPort};
use cv_core::InvestmentId;
use serde::Serialize;
use tracing::{info_span, Instrument};

/// Investment plus its countdown at the time of the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentStatusView {
    pub investment: Investment,
    /// Only active investments count down. `None` otherwise, or when the end
    /// date cannot be parsed.
    pub countdown: Option<MaturityCountdown>,
}

impl InvestmentStatusView {
    pub fn build(investment: Investment, clock: &dyn ClockPort) -> Self {
        let countdown = match investment.status {
            InvestmentStatus::Active => investment
                .end_time()
                .map(|end| MaturityCountdown::at(end, clock.now())),
            _ => None,
        };
        Self {
            investment,
            countdown,
        }
    }

    pub fn is_claimable(&self) -> bool {
        self.countdown.is_some_and(|c| c.is_matured())
    }
}

pub struct TrackInvestment {
    api: Arc<dyn InvestmentApiPort>,
    clock: Arc<dyn ClockPort>,
}

impl TrackInvestment {
    pub fn new(api: Arc<dyn InvestmentApiPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { api, clock }
    }

    pub async fn execute(&self, id: &InvestmentId) -> Result<InvestmentStatusView, ApiError> {
        let span = info_span!("usecase.track_investment.execute", investment_id = %id);
        async {
            let investment = self.api.get(id).await?;
            Ok(InvestmentStatusView::build(investment, self.clock.as_ref()))
        }
        .instrument(span)
        .await
    }
}
