use std::sync::Arc;

use cv_core::ports::ReferralApiPort;
use cv_core::referral::{referral_link, ReferralStats};
use cv_core::UserId;
use tracing::warn;

use super::AccountError;

const STATS_FALLBACK: &str = "Could not load referral statistics.";

#[derive(Debug, Clone, PartialEq)]
pub struct ReferralSummary {
    /// Link to share; new users who sign up through it count as referrals.
    pub link: String,
    pub stats: ReferralStats,
}

/// Referral totals plus the user's invite link.
///
/// 邀请统计与邀请链接。
pub struct ReferralOverview {
    api: Arc<dyn ReferralApiPort>,
    site_url: String,
}

impl ReferralOverview {
    pub fn new(api: Arc<dyn ReferralApiPort>, site_url: impl Into<String>) -> Self {
        Self {
            api,
            site_url: site_url.into(),
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<ReferralSummary, AccountError> {
        let stats = self.api.stats(user_id).await.map_err(|e| {
            warn!(error = %e, "referral stats unavailable");
            AccountError::from_api(e, STATS_FALLBACK)
        })?;
        Ok(ReferralSummary {
            link: referral_link(&self.site_url, user_id),
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cv_core::ports::ApiError;

    struct FixedReferralApi(Result<ReferralStats, ApiError>);

    #[async_trait]
    impl ReferralApiPort for FixedReferralApi {
        async fn stats(&self, _user_id: &UserId) -> Result<ReferralStats, ApiError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn summary_carries_link_and_stats() {
        let stats = ReferralStats {
            total_referrals: 3,
            referral_earnings: 15.0,
            referral_list: Vec::new(),
        };
        let overview = ReferralOverview::new(
            Arc::new(FixedReferralApi(Ok(stats.clone()))),
            "https://coinvest.example",
        );

        let summary = overview.execute(&UserId::from("17")).await.unwrap();
        assert_eq!(summary.link, "https://coinvest.example/signup?ref=17");
        assert_eq!(summary.stats, stats);
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let overview = ReferralOverview::new(
            Arc::new(FixedReferralApi(Err(ApiError::Transport("reset".into())))),
            "https://coinvest.example",
        );
        let err = overview.execute(&UserId::from("17")).await.unwrap_err();
        assert!(matches!(err, AccountError::Transport(_)));
    }
}
