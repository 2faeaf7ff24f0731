//! Investment plans and plan purchases.
//!
//! 投资计划与购买请求。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{PlanId, UserId};
use crate::wallet::AdminWallet;

/// A plan offered on the invest page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    #[serde(deserialize_with = "crate::lenient::amount")]
    pub min_deposit: f64,
    #[serde(deserialize_with = "crate::lenient::amount")]
    pub max_deposit: f64,
    #[serde(deserialize_with = "crate::lenient::amount")]
    pub roi_percentage: f64,
    #[serde(deserialize_with = "crate::lenient::amount")]
    pub duration_hours: f64,
}

/// Amount outside the plan's deposit range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanAmountError {
    #[error("Please enter an investment amount.")]
    NotPositive,
    #[error("The minimum for this plan is ${min:.2}.")]
    BelowMinimum { min: f64 },
    #[error("The maximum for this plan is ${max:.2}.")]
    AboveMaximum { max: f64 },
}

impl Plan {
    /// Human duration: whole or one-decimal days from 24 hours up, hours below.
    ///
    /// `24` -> `1 Day`, `36` -> `1.5 Days`, `12` -> `12 Hours`.
    pub fn duration_label(&self) -> String {
        let hours = self.duration_hours;
        if hours >= 24.0 {
            let days = hours / 24.0;
            let unit = if days == 1.0 { "Day" } else { "Days" };
            if days.fract() == 0.0 {
                format!("{days} {unit}")
            } else {
                format!("{days:.1} {unit}")
            }
        } else {
            let unit = if hours == 1.0 { "Hour" } else { "Hours" };
            format!("{hours} {unit}")
        }
    }

    pub fn check_amount(&self, amount: f64) -> Result<(), PlanAmountError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(PlanAmountError::NotPositive);
        }
        if amount < self.min_deposit {
            return Err(PlanAmountError::BelowMinimum {
                min: self.min_deposit,
            });
        }
        if amount > self.max_deposit {
            return Err(PlanAmountError::AboveMaximum {
                max: self.max_deposit,
            });
        }
        Ok(())
    }
}

/// How a plan purchase is paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Debited from the account balance; the plan starts at once.
    Balance,
    /// Transferred to a platform wallet; an admin confirms the payment.
    Crypto { currency: String, network: String },
}

impl PaymentMethod {
    pub fn to_wallet(wallet: &AdminWallet) -> Self {
        let network = if wallet.network.trim().is_empty() {
            "N/A"
        } else {
            &wallet.network
        };
        Self::Crypto {
            currency: wallet.currency().to_string(),
            network: network.to_string(),
        }
    }

    /// Wire value of the `method` field.
    pub fn method(&self) -> &str {
        match self {
            Self::Balance => "Balance",
            Self::Crypto { currency, .. } => currency,
        }
    }

    /// Wire value of the `network` field.
    pub fn network(&self) -> &str {
        match self {
            Self::Balance => "Internal",
            Self::Crypto { network, .. } => network,
        }
    }
}

/// Everything the purchase endpoint needs; plan terms are copied from [`Plan`].
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    pub user_id: UserId,
    pub amount: f64,
    pub plan_name: String,
    pub roi_percentage: f64,
    pub duration_hours: f64,
    pub payment: PaymentMethod,
}

impl PurchaseRequest {
    pub fn new(user_id: UserId, plan: &Plan, amount: f64, payment: PaymentMethod) -> Self {
        Self {
            user_id,
            amount,
            plan_name: plan.name.clone(),
            roi_percentage: plan.roi_percentage,
            duration_hours: plan.duration_hours,
            payment,
        }
    }
}
