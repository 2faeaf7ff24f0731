//! Use case for claiming the payout of a matured investment
//! 领取到期收益用例

use std::sync::Arc;

use cv_core::investment::{InvestmentStatus, MaturityCountdown};
use cv_core::ports::{ApiError, ClockPort, InvestmentApiPort};
use cv_core::InvestmentId;
use tracing::{info, info_span, warn, Instrument};

use super::InvestmentStatusView;

const CLAIM_FALLBACK: &str = "Payout could not be claimed.";

#[derive(Debug, thiserror::Error)]
pub enum ClaimPayoutError {
    #[error("Could not load the investment: {0}")]
    Lookup(#[source] ApiError),

    #[error("Only active investments can be claimed (status: {status}).")]
    NotActive { status: String },

    #[error("Investment matures in {remaining}.")]
    NotMatured { remaining: MaturityCountdown },

    #[error("Investment has an unreadable end date: {0}")]
    InvalidEndDate(String),

    /// The backend refused the claim.
    #[error("{0}")]
    Rejected(String),

    #[error("Server communication error")]
    Transport(String),
}

/// Use case for claiming a payout.
///
/// ## Behavior / 行为
/// - Reloads the investment so the check runs on fresh data
/// - Refuses before maturity and for non-active investments, without calling the backend
/// - Returns the backend confirmation message on success
pub struct ClaimPayout {
    api: Arc<dyn InvestmentApiPort>,
    clock: Arc<dyn ClockPort>,
}

impl ClaimPayout {
    pub fn new(api: Arc<dyn InvestmentApiPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { api, clock }
    }

    pub async fn execute(&self, id: &InvestmentId) -> Result<String, ClaimPayoutError> {
        let span = info_span!("usecase.claim_payout.execute", investment_id = %id);
        async {
            let investment = self.api.get(id).await.map_err(ClaimPayoutError::Lookup)?;
            if investment.status != InvestmentStatus::Active {
                return Err(ClaimPayoutError::NotActive {
                    status: String::from(investment.status),
                });
            }

            let view = InvestmentStatusView::build(investment, self.clock.as_ref());
            match view.countdown {
                Some(MaturityCountdown::Matured) => {}
                Some(remaining) => return Err(ClaimPayoutError::NotMatured { remaining }),
                None => {
                    return Err(ClaimPayoutError::InvalidEndDate(
                        view.investment.end_date.clone(),
                    ))
                }
            }

            let investment = view.investment;
            match self
                .api
                .claim_payout(&investment.id, &investment.user_id)
                .await
            {
                Ok(message) => {
                    info!(user_id = %investment.user_id, "payout claimed");
                    Ok(message)
                }
                Err(ApiError::Transport(detail)) => {
                    warn!(%detail, "payout claim failed");
                    Err(ClaimPayoutError::Transport(detail))
                }
                Err(err) => Err(ClaimPayoutError::Rejected(
                    err.server_message().unwrap_or(CLAIM_FALLBACK).to_string(),
                )),
            }
        }
        .instrument(span)
        .await
    }
}
