//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic or policies / 禁止任何业务逻辑或策略**
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Defaults and validation live in `cv-app` (`ApiSettings::from_config`).

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `https://api.example.com/crypto-backend`
    /// (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// HTTP request timeout in seconds (0 = not configured)
    pub request_timeout_secs: u64,

    /// Notification polling interval in seconds (0 = not configured)
    pub notification_poll_secs: u64,

    /// Session snapshot file path (path info only, no existence check)
    pub session_path: PathBuf,

    /// Directory for log files (empty = stdout only)
    pub log_dir: PathBuf,

    /// Public site URL used in referral links (empty = not configured)
    pub site_url: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let int_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64
        };

        Ok(Self {
            api_base_url: str_at("backend", "base_url"),
            request_timeout_secs: int_at("backend", "timeout_secs"),
            notification_poll_secs: int_at("notifications", "poll_interval_secs"),
            session_path: PathBuf::from(str_at("storage", "session_path")),
            log_dir: PathBuf::from(str_at("logging", "dir")),
            site_url: str_at("site", "url"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            request_timeout_secs: 0,
            notification_poll_secs: 0,
            session_path: PathBuf::new(),
            log_dir: PathBuf::new(),
            site_url: String::new(),
        }
    }
}
