//! Account balance, platform deposit wallets, deposits and withdrawals.
//!
//! 余额、平台收款钱包、充值与提现。

use serde::{Deserialize, Serialize};

use crate::ids::{TransactionId, UserId, WalletId};

/// Withdrawal network used when the user does not pick one.
pub const DEFAULT_WITHDRAWAL_NETWORK: &str = "ERC20";

/// Shortest destination address accepted for a withdrawal.
pub const MIN_WALLET_ADDRESS_LEN: usize = 10;

/// Balance plus recent activity, as shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "crate::lenient::amount_or_zero")]
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// One line of account activity (deposit, withdrawal, payout, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "crate::lenient::amount_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Platform wallet users transfer crypto to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminWallet {
    pub id: WalletId,
    #[serde(default)]
    pub currency_name: String,
    #[serde(default)]
    pub network: String,
    pub wallet_address: String,
}

impl AdminWallet {
    /// Currency name, `Crypto` when the wallet has none.
    pub fn currency(&self) -> &str {
        if self.currency_name.trim().is_empty() {
            "Crypto"
        } else {
            &self.currency_name
        }
    }

    /// `"USDT (TRC20)"`, or just the currency when the network is blank.
    pub fn label(&self) -> String {
        if self.network.trim().is_empty() {
            self.currency().to_string()
        } else {
            format!("{} ({})", self.currency(), self.network)
        }
    }
}

/// A logged deposit and its review status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRecord {
    #[serde(default)]
    pub id: Option<TransactionId>,
    #[serde(default, deserialize_with = "crate::lenient::amount_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Deposit announcement: the user says they sent `amount` to a platform wallet.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRequest {
    pub user_id: UserId,
    pub amount: f64,
    pub method: String,
    pub network: String,
}

impl DepositRequest {
    pub fn to_wallet(user_id: UserId, amount: f64, wallet: &AdminWallet) -> Self {
        Self {
            user_id,
            amount,
            method: wallet.currency().to_string(),
            network: wallet.network.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalRequest {
    pub user_id: UserId,
    pub amount: f64,
    pub wallet_address: String,
    pub network: String,
}
