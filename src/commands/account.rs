//! Referral statistics and password change.

use anyhow::bail;

use cv_app::usecases::{ChangePassword, CurrentSession, ReferralOverview, ReferralSummary};

use super::terminal::Prompt;
use crate::bootstrap::AppDeps;

pub fn render_referrals(summary: &ReferralSummary) -> String {
    let stats = &summary.stats;
    let mut out = format!(
        "Invite link: {}\nReferrals: {}  Earnings: ${:.2}",
        summary.link, stats.total_referrals, stats.referral_earnings
    );
    if stats.referral_list.is_empty() {
        out.push_str("\nNo referrals yet. Start sharing!");
    }
    for r in &stats.referral_list {
        out.push_str(&format!("\n  {:<20} {:<10}", r.full_name, r.rank));
        if let Some(joined) = r.created_at.as_deref() {
            out.push_str(&format!(" {joined}"));
        }
    }
    out
}

pub async fn referrals<P: Prompt + ?Sized>(deps: &AppDeps, prompt: &mut P) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let summary = ReferralOverview::new(deps.referral_api.clone(), deps.settings.site_url.clone())
        .execute(&user.id)
        .await?;
    prompt.say(&render_referrals(&summary));
    Ok(())
}

pub async fn change_password<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let Some(current) = prompt.secret("Current password: ").await? else {
        bail!("input closed");
    };
    let Some(new) = prompt.secret("New password: ").await? else {
        bail!("input closed");
    };
    let Some(confirmation) = prompt.secret("Confirm new password: ").await? else {
        bail!("input closed");
    };
    let message = ChangePassword::new(deps.account_api.clone())
        .execute(&user.id, current, new, confirmation)
        .await?;
    prompt.say(&message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::referral::{Referral, ReferralStats};

    #[test]
    fn referrals_show_link_totals_and_names() {
        let summary = ReferralSummary {
            link: "https://coinvest.example/signup?ref=7".into(),
            stats: ReferralStats {
                total_referrals: 1,
                referral_earnings: 5.0,
                referral_list: vec![Referral {
                    full_name: "Ann".into(),
                    rank: "Bronze".into(),
                    created_at: Some("2025-03-01".into()),
                }],
            },
        };

        let text = render_referrals(&summary);
        assert!(text.starts_with("Invite link: https://coinvest.example/signup?ref=7"));
        assert!(text.contains("Referrals: 1  Earnings: $5.00"));
        assert!(text.contains("Ann"));
        assert!(text.ends_with("2025-03-01"));
    }

    #[test]
    fn no_referrals_invites_sharing() {
        let summary = ReferralSummary {
            link: "x".into(),
            stats: ReferralStats::default(),
        };
        assert!(render_referrals(&summary).ends_with("Start sharing!"));
    }
}
