//! Business logic use cases
//!
//! 是否是独立 Use Case，取决于“是否需要用户 / 系统再次做出决策”。
//! Signup is a multi-step flow driven by an orchestrator; the other use cases
//! are single calls with an `execute` entry point.

pub mod account;
pub mod auth;
pub mod investment;
pub mod notifications;
pub mod plans;
pub mod registration;
pub mod wallet;

pub use account::{AccountError, ChangePassword, ReferralOverview, ReferralSummary};
pub use auth::{AdminLogin, AuthError, CurrentSession, Login, Logout};
pub use investment::{ClaimPayout, ClaimPayoutError, InvestmentStatusView, TrackInvestment};
pub use notifications::NotificationPoller;
pub use plans::{ListPlans, MyInvestments, PlanError, PurchasePlan, PurchaseReceipt};
pub use registration::{DispatchOutcome, RegistrationOrchestrator};
pub use wallet::{
    DepositHistory, DepositReceipt, LogDeposit, RequestWithdrawal, ShowDashboard, WalletError,
};
