//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Apply environment overrides / 应用环境变量覆盖
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation or default value logic / 禁止验证与默认值逻辑**
//!
//! Policy lives in `cv_app::ApiSettings::from_config`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cv_core::config::AppConfig;

/// Overrides `[backend].base_url` when set and non-empty.
pub const BASE_URL_ENV: &str = "CV_API_BASE_URL";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Empty or missing values are accepted as facts.
/// 空值或缺失值被视为事实，不做校验。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the config source.
///
/// An explicit path must exist. Without one, `default_path` is used when the
/// file is there; otherwise the config is empty and the environment has to
/// supply the backend URL.
pub fn resolve_config(explicit: Option<PathBuf>, default_path: &Path) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if default_path.is_file() => load_config(default_path.to_path_buf()),
        None => {
            tracing::debug!(path = %default_path.display(), "no config file, using empty config");
            Ok(AppConfig::empty())
        }
    }
}

/// 环境变量优先于配置文件。
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        if !url.trim().is_empty() {
            config.api_base_url = url;
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [backend]
            base_url = "https://api.example.com/crypto-backend"
            timeout_secs = 20

            [notifications]
            poll_interval_secs = 45

            [storage]
            session_path = "/tmp/coinvest/session.json"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/crypto-backend");
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.notification_poll_secs, 45);
        assert_eq!(config.session_path, PathBuf::from("/tmp/coinvest/session.json"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[backend\nbase_url = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = resolve_config(Some(missing.clone()), &missing).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_missing_default_file_yields_empty_config() {
        let dir = TempDir::new().unwrap();

        let config = resolve_config(None, &dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    #[serial]
    fn test_env_override_wins_over_file() {
        std::env::set_var(BASE_URL_ENV, "http://localhost:9000");
        let mut config = AppConfig::empty();
        config.api_base_url = "https://file.example.com".into();

        let config = apply_env_overrides(config);
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(config.api_base_url, "http://localhost:9000");
    }

    #[test]
    #[serial]
    fn test_blank_env_value_is_ignored() {
        std::env::set_var(BASE_URL_ENV, "  ");
        let mut config = AppConfig::empty();
        config.api_base_url = "https://file.example.com".into();

        let config = apply_env_overrides(config);
        std::env::remove_var(BASE_URL_ENV);

        assert_eq!(config.api_base_url, "https://file.example.com");
    }
}
