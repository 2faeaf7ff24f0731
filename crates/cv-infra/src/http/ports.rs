use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

use cv_core::investment::Investment;
use cv_core::notification::NotificationFeed;
use cv_core::plan::{Plan, PurchaseRequest};
use cv_core::ports::{
    AccountApiPort, ApiError, AuthApiPort, InvestmentApiPort, NotificationApiPort, PlanApiPort,
    ReferralApiPort, RegistrationApiPort, WalletApiPort,
};
use cv_core::referral::ReferralStats;
use cv_core::registration::RegistrationRequest;
use cv_core::wallet::{
    AdminWallet, DashboardSummary, DepositRecord, DepositRequest, WithdrawalRequest,
};
use cv_core::{AdminSession, InvestmentId, PasswordChange, SecretString, UserId, UserSession};

use super::client::HttpBackend;
use super::endpoints::*;

const CLAIM_CONFIRMATION: &str = "Payout claimed.";

#[derive(Serialize)]
struct SignupBody<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
    /// `null` when the user did not arrive through a referral link.
    ref_id: Option<&'a str>,
}

#[async_trait]
impl RegistrationApiPort for HttpBackend {
    async fn request_otp(&self, email: &str) -> Result<(), ApiError> {
        self.post_json(SEND_OTP, &json!({ "email": email })).await?;
        Ok(())
    }

    async fn verify_otp(&self, email: &str, code: &str) -> Result<(), ApiError> {
        self.post_json(VERIFY_OTP, &json!({ "email": email, "otp": code }))
            .await?;
        Ok(())
    }

    async fn complete_registration(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        let body = SignupBody {
            full_name: &request.full_name,
            email: &request.email,
            password: request.password.expose(),
            ref_id: request.referral_id.as_ref().map(|id| id.as_str()),
        };
        self.post_json(SIGNUP, &body).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApiPort for HttpBackend {
    async fn login(&self, email: &str, password: &SecretString) -> Result<UserSession, ApiError> {
        let mut accepted = self
            .post_json(LOGIN, &json!({ "email": email, "password": password.expose() }))
            .await?;
        accepted.take("user")
    }

    async fn admin_login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AdminSession, ApiError> {
        let mut accepted = self
            .post_json(
                ADMIN_LOGIN,
                &json!({ "email": email, "password": password.expose() }),
            )
            .await?;
        accepted.take("user")
    }
}

#[async_trait]
impl NotificationApiPort for HttpBackend {
    async fn fetch(&self, user_id: &UserId) -> Result<NotificationFeed, ApiError> {
        let mut accepted = self
            .get_json(GET_NOTIFICATIONS, &[("user_id", user_id.as_str())])
            .await?;
        accepted.take("data")
    }

    async fn mark_read(&self, user_id: &UserId) -> Result<(), ApiError> {
        self.post_json(MARK_NOTIFICATIONS_READ, &json!({ "user_id": user_id }))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl InvestmentApiPort for HttpBackend {
    async fn get(&self, id: &InvestmentId) -> Result<Investment, ApiError> {
        let mut accepted = self.get_json(GET_INVESTMENT, &[("id", id.as_str())]).await?;
        accepted.take("data")
    }

    async fn claim_payout(
        &self,
        investment_id: &InvestmentId,
        user_id: &UserId,
    ) -> Result<String, ApiError> {
        let accepted = self
            .post_json(
                CLAIM_PAYOUT,
                &json!({ "investment_id": investment_id, "user_id": user_id }),
            )
            .await?;
        Ok(accepted
            .into_message()
            .unwrap_or_else(|| CLAIM_CONFIRMATION.to_string()))
    }
}

#[derive(Serialize)]
struct PurchaseBody<'a> {
    user_id: &'a UserId,
    amount: f64,
    plan_name: &'a str,
    roi: f64,
    hours: f64,
    method: &'a str,
    network: &'a str,
}

#[async_trait]
impl PlanApiPort for HttpBackend {
    async fn list_plans(&self) -> Result<Vec<Plan>, ApiError> {
        let mut accepted = self.get_json(GET_PLANS, &[]).await?;
        accepted.take("plans")
    }

    async fn my_investments(&self, user_id: &UserId) -> Result<Vec<Investment>, ApiError> {
        let mut accepted = self
            .get_json(GET_MY_INVESTMENTS, &[("user_id", user_id.as_str())])
            .await?;
        accepted.take("data")
    }

    async fn purchase(&self, request: &PurchaseRequest) -> Result<Option<String>, ApiError> {
        let body = PurchaseBody {
            user_id: &request.user_id,
            amount: request.amount,
            plan_name: &request.plan_name,
            roi: request.roi_percentage,
            hours: request.duration_hours,
            method: request.payment.method(),
            network: request.payment.network(),
        };
        Ok(self.post_json(PURCHASE_PLAN, &body).await?.into_message())
    }
}

#[async_trait]
impl WalletApiPort for HttpBackend {
    async fn dashboard(&self, user_id: &UserId) -> Result<DashboardSummary, ApiError> {
        self.get_json(GET_DASHBOARD, &[("user_id", user_id.as_str())])
            .await?
            .into_payload()
    }

    async fn admin_wallets(&self) -> Result<Vec<AdminWallet>, ApiError> {
        let mut accepted = self.get_json(GET_ADMIN_WALLETS, &[]).await?;
        accepted.take("wallets")
    }

    async fn log_deposit(&self, request: &DepositRequest) -> Result<Option<String>, ApiError> {
        let body = json!({
            "user_id": request.user_id,
            "amount": request.amount,
            "method": request.method,
            "network": request.network,
        });
        Ok(self.post_json(LOG_DEPOSIT, &body).await?.into_message())
    }

    async fn deposit_history(&self, user_id: &UserId) -> Result<Vec<DepositRecord>, ApiError> {
        let mut accepted = self
            .get_json(
                GET_TRANSACTIONS,
                &[("user_id", user_id.as_str()), ("type", "deposit")],
            )
            .await?;
        accepted.take("data")
    }

    async fn withdraw(&self, request: &WithdrawalRequest) -> Result<Option<String>, ApiError> {
        let body = json!({
            "user_id": request.user_id,
            "amount": request.amount,
            "wallet_address": request.wallet_address,
            "network": request.network,
        });
        Ok(self.post_json(WITHDRAW, &body).await?.into_message())
    }
}

#[async_trait]
impl ReferralApiPort for HttpBackend {
    async fn stats(&self, user_id: &UserId) -> Result<ReferralStats, ApiError> {
        self.get_json(GET_REFERRAL_STATS, &[("user_id", user_id.as_str())])
            .await?
            .nested_or_top_level("data")
    }
}

#[async_trait]
impl AccountApiPort for HttpBackend {
    async fn change_password(
        &self,
        user_id: &UserId,
        change: &PasswordChange,
    ) -> Result<Option<String>, ApiError> {
        let body = json!({
            "user_id": user_id,
            "old_password": change.current().expose(),
            "new_password": change.new_password().expose(),
        });
        Ok(self.post_json(UPDATE_PASSWORD, &body).await?.into_message())
    }
}
