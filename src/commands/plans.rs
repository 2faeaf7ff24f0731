//! Plan catalogue, purchases and the investment list.

use cv_app::usecases::{CurrentSession, ListPlans, MyInvestments, PurchasePlan, PurchaseReceipt};
use cv_core::investment::Investment;
use cv_core::plan::{PaymentMethod, Plan};
use cv_core::{PlanId, WalletId};

use super::terminal::Prompt;
use crate::bootstrap::AppDeps;

pub fn render_plans(plans: &[Plan]) -> String {
    if plans.is_empty() {
        return "No plans are open right now.".to_string();
    }
    plans
        .iter()
        .map(|p| {
            format!(
                "[{}] {}: {}% in {}, ${:.2} - ${:.2}",
                p.id,
                p.name,
                p.roi_percentage,
                p.duration_label(),
                p.min_deposit,
                p.max_deposit
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_receipt(receipt: &PurchaseReceipt) -> String {
    let mut out = receipt.message.clone();
    match (&receipt.payment, &receipt.wallet) {
        (PaymentMethod::Balance, _) => {
            out.push_str(&format!(
                "\n{} started with ${:.2} from your balance.",
                receipt.plan_name, receipt.amount
            ));
        }
        (PaymentMethod::Crypto { .. }, Some(wallet)) => {
            out.push_str(&format!(
                "\nSend ${:.2} in {} to:\n  {}\n\
                 The plan starts once an admin confirms the transfer.",
                receipt.amount,
                wallet.label(),
                wallet.wallet_address
            ));
        }
        (PaymentMethod::Crypto { .. }, None) => {}
    }
    out
}

pub fn render_investments(list: &[Investment]) -> String {
    if list.is_empty() {
        return "You have no investments yet.".to_string();
    }
    list.iter()
        .map(|inv| {
            format!(
                "#{:<5} {:<12} ${:>10.2} -> ${:>10.2}  {:<10} ends {}",
                inv.id,
                inv.plan_name.as_deref().unwrap_or("-"),
                inv.amount_invested,
                inv.expected_return,
                String::from(inv.status.clone()),
                inv.end_date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn plans<P: Prompt + ?Sized>(deps: &AppDeps, prompt: &mut P) -> anyhow::Result<()> {
    let plans = ListPlans::new(deps.plan_api.clone()).execute().await?;
    prompt.say(&render_plans(&plans));
    Ok(())
}

pub async fn invest<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    plan_id: String,
    amount: f64,
    wallet: Option<String>,
) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let wallet = wallet.map(|w| WalletId::from(w.trim()));
    let receipt = PurchasePlan::new(deps.plan_api.clone(), deps.wallet_api.clone())
        .execute(
            &user.id,
            &PlanId::from(plan_id.trim()),
            amount,
            wallet.as_ref(),
        )
        .await?;
    prompt.say(&render_receipt(&receipt));
    Ok(())
}

pub async fn investments<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let list = MyInvestments::new(deps.plan_api.clone())
        .execute(&user.id)
        .await?;
    prompt.say(&render_investments(&list));
    Ok(())
}
