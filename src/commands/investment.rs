use cv_app::usecases::{ClaimPayout, InvestmentStatusView, TrackInvestment};
use cv_core::InvestmentId;

use super::terminal::Prompt;
use crate::bootstrap::AppDeps;

pub fn render_status(view: &InvestmentStatusView) -> String {
    let inv = &view.investment;
    let mut out = format!(
        "Investment #{} ({})",
        inv.id,
        inv.plan_name.as_deref().unwrap_or("unnamed plan")
    );
    out.push_str(&format!("\n  invested: {:.2}", inv.amount_invested));
    out.push_str(&format!(
        "\n  expected: {:.2} (profit {:.2})",
        inv.expected_return,
        inv.net_profit()
    ));
    out.push_str(&format!("\n  status:   {}", String::from(inv.status.clone())));
    out.push_str(&format!("\n  ends:     {}", inv.end_date));
    if let Some(countdown) = &view.countdown {
        out.push_str(&format!("\n  maturity: {countdown}"));
    }
    out
}

pub async fn investment<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    id: String,
    claim: bool,
) -> anyhow::Result<()> {
    let id = InvestmentId::from(id.trim());
    let view = TrackInvestment::new(deps.investment_api.clone(), deps.clock.clone())
        .execute(&id)
        .await?;
    prompt.say(&render_status(&view));

    if claim {
        let message = ClaimPayout::new(deps.investment_api.clone(), deps.clock.clone())
            .execute(&id)
            .await?;
        prompt.say(&message);
    }
    Ok(())
}
