//! Endpoint paths, relative to the configured base URL.

pub const SEND_OTP: &str = "send_otp.php";
pub const VERIFY_OTP: &str = "verify_otp.php";
pub const SIGNUP: &str = "signup.php";
pub const LOGIN: &str = "login.php";
pub const ADMIN_LOGIN: &str = "admin/auth/login.php";
pub const GET_NOTIFICATIONS: &str = "get_notifications.php";
pub const MARK_NOTIFICATIONS_READ: &str = "mark_notifications_read.php";
pub const GET_INVESTMENT: &str = "get_investment_by_id.php";
pub const CLAIM_PAYOUT: &str = "claim_payout.php";
pub const GET_DASHBOARD: &str = "get_dashboard_data.php";
pub const GET_PLANS: &str = "get_plans.php";
pub const GET_MY_INVESTMENTS: &str = "get_my_investments.php";
pub const PURCHASE_PLAN: &str = "purchase_plan.php";
pub const GET_ADMIN_WALLETS: &str = "get_admin_wallets.php";
pub const LOG_DEPOSIT: &str = "log_deposit.php";
pub const GET_TRANSACTIONS: &str = "get_transactions.php";
pub const WITHDRAW: &str = "withdraw.php";
pub const GET_REFERRAL_STATS: &str = "get_referral_stats.php";
pub const UPDATE_PASSWORD: &str = "update_password.php";
