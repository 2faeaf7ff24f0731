//! Balance, deposits and withdrawals.

use cv_app::usecases::{
    CurrentSession, DepositHistory, DepositReceipt, LogDeposit, RequestWithdrawal, ShowDashboard,
};
use cv_core::wallet::{DashboardSummary, DepositRecord};
use cv_core::WalletId;

use super::terminal::Prompt;
use crate::bootstrap::AppDeps;

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    let mut out = format!("Balance: ${:.2}", summary.balance);
    if summary.transactions.is_empty() {
        out.push_str("\n  (no transactions yet)");
    }
    for tx in &summary.transactions {
        out.push_str(&format!(
            "\n  {:<12} ${:>10.2}  {}",
            tx.kind, tx.amount, tx.status
        ));
        if let Some(when) = tx.created_at.as_deref().filter(|w| !w.is_empty()) {
            out.push_str(&format!("  {when}"));
        }
    }
    out
}

pub fn render_deposit_receipt(receipt: &DepositReceipt) -> String {
    format!(
        "Send ${:.2} in {} to:\n  {}\n{}",
        receipt.amount,
        receipt.wallet.label(),
        receipt.wallet.wallet_address,
        receipt.message
    )
}

pub fn render_deposits(records: &[DepositRecord]) -> String {
    if records.is_empty() {
        return "No deposits yet.".to_string();
    }
    records
        .iter()
        .map(|d| {
            let id = d.id.as_ref().map_or_else(|| "-".to_string(), |id| format!("#{id}"));
            let when = d.created_at.as_deref().unwrap_or("");
            format!("{id:<6} ${:>10.2}  {:<10} {when}", d.amount, d.status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn dashboard<P: Prompt + ?Sized>(deps: &AppDeps, prompt: &mut P) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let summary = ShowDashboard::new(deps.wallet_api.clone())
        .execute(&user.id)
        .await?;
    prompt.say(&render_dashboard(&summary));
    Ok(())
}

pub async fn deposit<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    amount: f64,
    wallet: Option<String>,
) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let wallet = wallet.map(|w| WalletId::from(w.trim()));
    let receipt = LogDeposit::new(deps.wallet_api.clone())
        .execute(&user.id, amount, wallet.as_ref())
        .await?;
    prompt.say(&render_deposit_receipt(&receipt));
    Ok(())
}

pub async fn deposits<P: Prompt + ?Sized>(deps: &AppDeps, prompt: &mut P) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let records = DepositHistory::new(deps.wallet_api.clone())
        .execute(&user.id)
        .await?;
    prompt.say(&render_deposits(&records));
    Ok(())
}

pub async fn withdraw<P: Prompt + ?Sized>(
    deps: &AppDeps,
    prompt: &mut P,
    amount: f64,
    address: String,
    network: Option<String>,
) -> anyhow::Result<()> {
    let user = CurrentSession::new(deps.session_store.clone())
        .require_user()
        .await?;
    let message = RequestWithdrawal::new(deps.wallet_api.clone())
        .execute(&user.id, amount, &address, network.as_deref())
        .await?;
    prompt.say(&message);
    Ok(())
}
