//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (HTTP backend, session file, clock)
//!   / 创建 infra 层具体实现
//! - ✅ Hand them out as port trait objects / 以 Port trait 对象形式提供
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//! - Settings are already validated by `ApiSettings::from_config`
//! - 配置已由 `ApiSettings::from_config` 校验
//!
//! > **This is the only place allowed to depend on cv-infra and cv-app simultaneously.**
//! > **这是唯一允许同时依赖 cv-infra 和 cv-app 的地方。**

use std::sync::Arc;

use cv_app::ApiSettings;
use cv_core::ports::{
    AccountApiPort, AuthApiPort, ClockPort, InvestmentApiPort, NotificationApiPort, PlanApiPort,
    ReferralApiPort, RegistrationApiPort, SessionStorePort, WalletApiPort,
};
use cv_infra::{FileSessionStore, HttpBackend, SystemClock};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Port implementations shared by every command.
///
/// 所有命令共用的端口实现。
#[derive(Clone)]
pub struct AppDeps {
    pub settings: ApiSettings,
    pub registration_api: Arc<dyn RegistrationApiPort>,
    pub auth_api: Arc<dyn AuthApiPort>,
    pub notification_api: Arc<dyn NotificationApiPort>,
    pub investment_api: Arc<dyn InvestmentApiPort>,
    pub plan_api: Arc<dyn PlanApiPort>,
    pub wallet_api: Arc<dyn WalletApiPort>,
    pub referral_api: Arc<dyn ReferralApiPort>,
    pub account_api: Arc<dyn AccountApiPort>,
    pub session_store: Arc<dyn SessionStorePort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Wire all dependencies from validated settings
/// 根据已校验的设置组装依赖
///
/// One `HttpBackend` serves every API port, so all commands share a single
/// connection pool and base URL.
pub fn wire_dependencies(settings: ApiSettings) -> WiringResult<AppDeps> {
    let backend = Arc::new(
        HttpBackend::new(settings.base_url.clone(), settings.request_timeout)
            .map_err(|e| WiringError::HttpClientInit(e.to_string()))?,
    );
    let session_store = Arc::new(FileSessionStore::new(settings.session_path.clone()));

    tracing::debug!(
        base_url = backend.base_url(),
        session = %settings.session_path.display(),
        "dependencies wired"
    );

    Ok(AppDeps {
        settings,
        registration_api: backend.clone(),
        auth_api: backend.clone(),
        notification_api: backend.clone(),
        investment_api: backend.clone(),
        plan_api: backend.clone(),
        wallet_api: backend.clone(),
        referral_api: backend.clone(),
        account_api: backend,
        session_store,
        clock: Arc::new(SystemClock),
    })
}
