//! Use case for buying into a plan
//! 购买投资计划用例

use std::sync::Arc;

use cv_core::plan::{PaymentMethod, PurchaseRequest};
use cv_core::ports::{PlanApiPort, WalletApiPort};
use cv_core::wallet::AdminWallet;
use cv_core::{PlanId, UserId, WalletId};
use tracing::{info, info_span, Instrument};

use super::PlanError;
use crate::usecases::wallet::{pick_wallet, WalletError};

const PURCHASE_CONFIRMATION: &str = "Investment processed successfully!";
const PURCHASE_FALLBACK: &str = "Investment could not be processed.";
const PLANS_FALLBACK: &str = "Could not load the plans.";
const BALANCE_FALLBACK: &str = "Could not load your balance.";
const WALLETS_FALLBACK: &str = "Could not load the deposit wallets.";

/// Outcome of a purchase.
///
/// `wallet` is set for crypto payments: the user still has to transfer the
/// amount there before an admin activates the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    pub plan_name: String,
    pub amount: f64,
    pub payment: PaymentMethod,
    pub wallet: Option<AdminWallet>,
    pub message: String,
}

/// Use case for buying a plan.
///
/// ## Behavior / 行为
/// - The amount must sit between the plan's minimum and maximum deposit
/// - A balance that covers the amount pays for it at once
/// - Otherwise the purchase becomes a crypto transfer to a platform wallet
///   (`wallet_id`, or the first one)
pub struct PurchasePlan {
    plans: Arc<dyn PlanApiPort>,
    wallet: Arc<dyn WalletApiPort>,
}

impl PurchasePlan {
    pub fn new(plans: Arc<dyn PlanApiPort>, wallet: Arc<dyn WalletApiPort>) -> Self {
        Self { plans, wallet }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        plan_id: &PlanId,
        amount: f64,
        wallet_id: Option<&WalletId>,
    ) -> Result<PurchaseReceipt, PlanError> {
        let span = info_span!(
            "usecase.purchase_plan.execute",
            user_id = %user_id,
            plan_id = %plan_id
        );
        async {
            let plan = self
                .plans
                .list_plans()
                .await
                .map_err(|e| PlanError::from_api(e, PLANS_FALLBACK))?
                .into_iter()
                .find(|p| &p.id == plan_id)
                .ok_or_else(|| PlanError::UnknownPlan(plan_id.to_string()))?;
            plan.check_amount(amount)?;

            let balance = self
                .wallet
                .dashboard(user_id)
                .await
                .map_err(|e| WalletError::from_api(e, BALANCE_FALLBACK))?
                .balance;

            let (payment, wallet) = if balance >= amount {
                (PaymentMethod::Balance, None)
            } else {
                let wallets = self
                    .wallet
                    .admin_wallets()
                    .await
                    .map_err(|e| WalletError::from_api(e, WALLETS_FALLBACK))?;
                let wallet = pick_wallet(wallets, wallet_id)?;
                (PaymentMethod::to_wallet(&wallet), Some(wallet))
            };

            let request = PurchaseRequest::new(user_id.clone(), &plan, amount, payment);
            let message = self
                .plans
                .purchase(&request)
                .await
                .map_err(|e| PlanError::from_api(e, PURCHASE_FALLBACK))?;
            info!(
                plan = %plan.name,
                amount,
                method = request.payment.method(),
                "plan purchased"
            );

            Ok(PurchaseReceipt {
                plan_name: plan.name,
                amount,
                payment: request.payment,
                wallet,
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| PURCHASE_CONFIRMATION.to_string()),
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::plans::test_support::FakePlanApi;
    use crate::usecases::wallet::test_support::FakeWalletApi;
    use cv_core::plan::PlanAmountError;
    use cv_core::ports::ApiError;

    fn purchase(plans: &Arc<FakePlanApi>, balance: f64) -> PurchasePlan {
        PurchasePlan::new(plans.clone(), Arc::new(FakeWalletApi::with_balance(balance)))
    }

    #[tokio::test]
    async fn covered_amount_is_paid_from_balance() {
        let plans = Arc::new(FakePlanApi::default());
        let receipt = purchase(&plans, 500.0)
            .execute(&UserId::from("7"), &PlanId::from("1"), 500.0, None)
            .await
            .unwrap();

        assert_eq!(receipt.payment, PaymentMethod::Balance);
        assert!(receipt.wallet.is_none());
        assert_eq!(receipt.message, PURCHASE_CONFIRMATION);
        let sent = plans.purchases.lock().unwrap().clone();
        assert_eq!(sent[0].plan_name, "Gold");
        assert_eq!(sent[0].roi_percentage, 35.0);
        assert_eq!(sent[0].duration_hours, 24.0);
        assert_eq!(sent[0].payment.network(), "Internal");
    }

    #[tokio::test]
    async fn short_balance_pays_by_crypto_to_the_chosen_wallet() {
        let plans = Arc::new(FakePlanApi::default());
        let receipt = purchase(&plans, 50.0)
            .execute(
                &UserId::from("7"),
                &PlanId::from("1"),
                200.0,
                Some(&WalletId::from("2")),
            )
            .await
            .unwrap();

        assert_eq!(
            receipt.payment,
            PaymentMethod::Crypto {
                currency: "BTC".into(),
                network: "TRC20".into()
            }
        );
        assert_eq!(receipt.wallet.map(|w| w.id), Some(WalletId::from("2")));
    }

    #[tokio::test]
    async fn amount_outside_range_never_reaches_backend() {
        let plans = Arc::new(FakePlanApi::default());
        let err = purchase(&plans, 5000.0)
            .execute(&UserId::from("7"), &PlanId::from("1"), 1500.0, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PlanError::Amount(PlanAmountError::AboveMaximum { .. })
        ));
        assert!(plans.purchases.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_plan_is_reported() {
        let plans = Arc::new(FakePlanApi::default());
        let err = purchase(&plans, 5000.0)
            .execute(&UserId::from("7"), &PlanId::from("42"), 150.0, None)
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::UnknownPlan(id) if id == "42"));
    }

    #[tokio::test]
    async fn rejected_purchase_shows_server_message() {
        let plans = Arc::new(FakePlanApi {
            purchase_result: Err(ApiError::rejected("Plan is closed")),
            ..FakePlanApi::default()
        });
        let err = purchase(&plans, 5000.0)
            .execute(&UserId::from("7"), &PlanId::from("1"), 150.0, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Plan is closed");
    }
}
