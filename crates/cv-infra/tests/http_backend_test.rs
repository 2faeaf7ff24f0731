use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use cv_core::investment::InvestmentStatus;
use cv_core::plan::{PaymentMethod, Plan, PurchaseRequest};
use cv_core::ports::{
    AccountApiPort, ApiError, AuthApiPort, InvestmentApiPort, NotificationApiPort, PlanApiPort,
    ReferralApiPort, RegistrationApiPort, WalletApiPort,
};
use cv_core::registration::RegistrationRequest;
use cv_core::wallet::{DepositRequest, WithdrawalRequest};
use cv_core::{InvestmentId, PasswordChange, PlanId, ReferralId, SecretString, UserId};
use cv_infra::HttpBackend;

fn backend(server: &Server) -> HttpBackend {
    HttpBackend::new(format!("{}/crypto-backend/", server.url()), Duration::from_secs(5)).unwrap()
}

fn investment_json() -> serde_json::Value {
    json!({
        "id": 11,
        "user_id": 7,
        "plan_name": "Gold",
        "amount_invested": "100.00",
        "expected_return": "150.00",
        "status": "active",
        "start_date": "2025-02-01 12:00:00",
        "end_date": "2025-03-01 12:00:00"
    })
}

fn signup_request(referral: Option<&str>) -> RegistrationRequest {
    RegistrationRequest {
        full_name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        password: SecretString::from("pa55word"),
        referral_id: referral.map(ReferralId::from),
    }
}

#[tokio::test]
async fn send_otp_posts_email_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/send_otp.php")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "email": "jane@example.com" })))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"OTP sent"}"#)
        .create_async()
        .await;

    backend(&server).request_otp("jane@example.com").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn verify_otp_failure_carries_server_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/verify_otp.php")
        .match_body(Matcher::Json(json!({ "email": "jane@example.com", "otp": "123456" })))
        .with_status(200)
        .with_body(r#"{"success":false,"message":"Invalid code"}"#)
        .create_async()
        .await;

    let err = backend(&server)
        .verify_otp("jane@example.com", "123456")
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("Invalid code"));
    mock.assert_async().await;
}

#[tokio::test]
async fn signup_sends_referral_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/signup.php")
        .match_body(Matcher::Json(json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "password": "pa55word",
            "ref_id": "42"
        })))
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    backend(&server)
        .complete_registration(&signup_request(Some("42")))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn signup_without_referral_sends_null() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/signup.php")
        .match_body(Matcher::PartialJson(json!({ "ref_id": null })))
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    backend(&server)
        .complete_registration(&signup_request(None))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_status_is_transport() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/crypto-backend/send_otp.php")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let err = backend(&server).request_otp("a@b.co").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn non_json_body_is_transport() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/crypto-backend/send_otp.php")
        .with_status(200)
        .with_body("<b>Warning</b>: mail() failed")
        .create_async()
        .await;

    let err = backend(&server).request_otp("a@b.co").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn unreachable_backend_is_transport() {
    let backend = HttpBackend::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let err = backend.request_otp("a@b.co").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn login_returns_user_with_extra_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/crypto-backend/login.php")
        .match_body(Matcher::Json(json!({ "email": "jane@example.com", "password": "pw" })))
        .with_body(
            json!({
                "success": true,
                "user": {
                    "id": 7,
                    "full_name": "Jane Doe",
                    "email": "jane@example.com",
                    "balance": "10.00"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let user = backend(&server)
        .login("jane@example.com", &SecretString::from("pw"))
        .await
        .unwrap();

    assert_eq!(user.id.as_str(), "7");
    assert_eq!(user.extra.get("balance"), Some(&json!("10.00")));
}

#[tokio::test]
async fn admin_login_hits_admin_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/admin/auth/login.php")
        .with_body(
            json!({
                "success": true,
                "user": { "id": "1", "email": "root@example.com", "role": "admin" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let admin = backend(&server)
        .admin_login("root@example.com", &SecretString::from("pw"))
        .await
        .unwrap();

    assert!(admin.is_admin());
    mock.assert_async().await;
}

#[tokio::test]
async fn notifications_are_read_from_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_notifications.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "7".into()))
        .with_body(
            json!({
                "success": true,
                "data": {
                    "list": [{ "id": 1, "title": "Deposit", "message": "Approved", "is_read": 0 }],
                    "unread_count": 1
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let feed = backend(&server).fetch(&UserId::from("7")).await.unwrap();

    assert_eq!(feed.unread_count, 1);
    assert_eq!(feed.list[0].title, "Deposit");
}

#[tokio::test]
async fn mark_read_posts_user_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/mark_notifications_read.php")
        .match_body(Matcher::Json(json!({ "user_id": "7" })))
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    backend(&server).mark_read(&UserId::from("7")).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn investment_is_loaded_by_id() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_investment_by_id.php")
        .match_query(Matcher::UrlEncoded("id".into(), "11".into()))
        .with_body(json!({ "success": true, "data": investment_json() }).to_string())
        .create_async()
        .await;

    let investment = backend(&server)
        .get(&InvestmentId::from("11"))
        .await
        .unwrap();

    assert_eq!(investment.status, InvestmentStatus::Active);
    assert_eq!(investment.user_id.as_str(), "7");
    assert!(investment.end_time().is_some());
}

#[tokio::test]
async fn claim_payout_returns_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/crypto-backend/claim_payout.php")
        .match_body(Matcher::Json(json!({ "investment_id": "11", "user_id": "7" })))
        .with_body(r#"{"success":true,"message":"Payout credited"}"#)
        .create_async()
        .await;

    let message = backend(&server)
        .claim_payout(&InvestmentId::from("11"), &UserId::from("7"))
        .await
        .unwrap();

    assert_eq!(message, "Payout credited");
}

#[tokio::test]
async fn plans_are_read_from_plans_key() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_plans.php")
        .with_body(
            json!({
                "success": true,
                "plans": [{
                    "id": 1,
                    "name": "Gold",
                    "min_deposit": "100",
                    "max_deposit": "5000",
                    "roi_percentage": "35",
                    "duration_hours": "24"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let plans = backend(&server).list_plans().await.unwrap();

    assert_eq!(plans[0].id, PlanId::from("1"));
    assert_eq!(plans[0].duration_label(), "1 Day");
}

#[tokio::test]
async fn my_investments_are_read_from_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_my_investments.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "7".into()))
        .with_body(json!({ "success": true, "data": [investment_json()] }).to_string())
        .create_async()
        .await;

    let list = backend(&server).my_investments(&UserId::from("7")).await.unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, InvestmentId::from("11"));
}

#[tokio::test]
async fn crypto_purchase_posts_plan_terms_and_wallet() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/purchase_plan.php")
        .match_body(Matcher::Json(json!({
            "user_id": "7",
            "amount": 250.0,
            "plan_name": "Gold",
            "roi": 35.0,
            "hours": 24.0,
            "method": "USDT",
            "network": "TRC20"
        })))
        .with_body(r#"{"success":true,"message":"Payment submitted"}"#)
        .create_async()
        .await;
    let plan = Plan {
        id: PlanId::from("1"),
        name: "Gold".into(),
        min_deposit: 100.0,
        max_deposit: 5000.0,
        roi_percentage: 35.0,
        duration_hours: 24.0,
    };
    let payment = PaymentMethod::Crypto {
        currency: "USDT".into(),
        network: "TRC20".into(),
    };

    let message = backend(&server)
        .purchase(&PurchaseRequest::new(UserId::from("7"), &plan, 250.0, payment))
        .await
        .unwrap();

    assert_eq!(message.as_deref(), Some("Payment submitted"));
    mock.assert_async().await;
}

#[tokio::test]
async fn dashboard_reads_top_level_balance() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_dashboard_data.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "7".into()))
        .with_body(
            json!({
                "success": true,
                "balance": "1250.00",
                "transactions": [{ "type": "deposit", "amount": "100", "status": "approved" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let summary = backend(&server).dashboard(&UserId::from("7")).await.unwrap();

    assert_eq!(summary.balance, 1250.0);
    assert_eq!(summary.transactions[0].kind, "deposit");
}

#[tokio::test]
async fn admin_wallets_are_read_from_wallets_key() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_admin_wallets.php")
        .with_body(
            json!({
                "success": true,
                "wallets": [{
                    "id": 3,
                    "currency_name": "USDT",
                    "network": "TRC20",
                    "wallet_address": "TXYZ1234567890"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let wallets = backend(&server).admin_wallets().await.unwrap();

    assert_eq!(wallets[0].label(), "USDT (TRC20)");
    assert_eq!(wallets[0].id.as_str(), "3");
}

#[tokio::test]
async fn deposit_is_logged_with_method_and_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/log_deposit.php")
        .match_body(Matcher::Json(json!({
            "user_id": "7",
            "amount": 50.0,
            "method": "USDT",
            "network": "TRC20"
        })))
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;
    let request = DepositRequest {
        user_id: UserId::from("7"),
        amount: 50.0,
        method: "USDT".into(),
        network: "TRC20".into(),
    };

    let message = backend(&server).log_deposit(&request).await.unwrap();

    assert_eq!(message, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn deposit_history_filters_by_type() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_transactions.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user_id".into(), "7".into()),
            Matcher::UrlEncoded("type".into(), "deposit".into()),
        ]))
        .with_body(
            json!({
                "success": true,
                "data": [{ "id": 5, "amount": "50.00", "status": "pending" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let history = backend(&server).deposit_history(&UserId::from("7")).await.unwrap();

    assert_eq!(history[0].status, "pending");
    assert_eq!(history[0].amount, 50.0);
}

#[tokio::test]
async fn withdrawal_rejection_keeps_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/crypto-backend/withdraw.php")
        .match_body(Matcher::PartialJson(json!({
            "wallet_address": "0x1234567890",
            "network": "ERC20"
        })))
        .with_body(r#"{"success":false,"message":"Below minimum withdrawal"}"#)
        .create_async()
        .await;
    let request = WithdrawalRequest {
        user_id: UserId::from("7"),
        amount: 5.0,
        wallet_address: "0x1234567890".into(),
        network: "ERC20".into(),
    };

    let err = backend(&server).withdraw(&request).await.unwrap_err();

    assert_eq!(err.server_message(), Some("Below minimum withdrawal"));
}

#[tokio::test]
async fn referral_stats_accept_nested_data() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_referral_stats.php")
        .match_query(Matcher::UrlEncoded("user_id".into(), "7".into()))
        .with_body(
            json!({
                "success": true,
                "data": {
                    "total_referrals": "2",
                    "referral_earnings": "10.5",
                    "referral_list": [{ "full_name": "Ann", "rank": "Bronze" }]
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let stats = backend(&server).stats(&UserId::from("7")).await.unwrap();

    assert_eq!(stats.total_referrals, 2);
    assert_eq!(stats.referral_list[0].full_name, "Ann");
}

#[tokio::test]
async fn referral_stats_accept_top_level_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/crypto-backend/get_referral_stats.php")
        .match_query(Matcher::Any)
        .with_body(r#"{"success":true,"total_referrals":4,"referral_earnings":20}"#)
        .create_async()
        .await;

    let stats = backend(&server).stats(&UserId::from("7")).await.unwrap();

    assert_eq!(stats.total_referrals, 4);
    assert_eq!(stats.referral_earnings, 20.0);
    assert!(stats.referral_list.is_empty());
}

#[tokio::test]
async fn password_change_sends_old_and_new() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/crypto-backend/update_password.php")
        .match_body(Matcher::Json(json!({
            "user_id": "7",
            "old_password": "old-pass",
            "new_password": "new-pass-1"
        })))
        .with_body(r#"{"success":true,"message":"Password updated"}"#)
        .create_async()
        .await;
    let change = PasswordChange::new(
        SecretString::from("old-pass"),
        SecretString::from("new-pass-1"),
        SecretString::from("new-pass-1"),
    )
    .unwrap();

    let message = backend(&server)
        .change_password(&UserId::from("7"), &change)
        .await
        .unwrap();

    assert_eq!(message.as_deref(), Some("Password updated"));
    mock.assert_async().await;
}
