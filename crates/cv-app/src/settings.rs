//! Policy layer on top of the raw [`AppConfig`] DTO.
//!
//! The DTO accepts whatever the file says; this module decides what an empty
//! or missing value means.

use std::path::PathBuf;
use std::time::Duration;

use cv_core::config::AppConfig;

use crate::app_paths::AppPaths;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_NOTIFICATION_POLL: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("backend base URL is not configured (set [backend].base_url or CV_API_BASE_URL)")]
    MissingBaseUrl,
    #[error("backend base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
}

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Single backend base URL, without trailing slash.
    pub base_url: String,
    pub request_timeout: Duration,
    pub notification_poll: Duration,
    pub session_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    /// Site origin for referral links, without trailing slash.
    pub site_url: String,
}

impl ApiSettings {
    /// Apply defaults to a loaded config.
    ///
    /// `fallback_paths` supplies locations the config leaves empty.
    pub fn from_config(
        config: &AppConfig,
        fallback_paths: &AppPaths,
    ) -> Result<Self, SettingsError> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SettingsError::MissingBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SettingsError::InvalidBaseUrl(base_url));
        }

        let secs_or = |secs: u64, default: Duration| {
            if secs == 0 {
                default
            } else {
                Duration::from_secs(secs)
            }
        };

        let session_path = if config.session_path.as_os_str().is_empty() {
            fallback_paths.session_path.clone()
        } else {
            config.session_path.clone()
        };
        let log_dir = if config.log_dir.as_os_str().is_empty() {
            None
        } else {
            Some(config.log_dir.clone())
        };

        let site_url = match config.site_url.trim().trim_end_matches('/') {
            "" => origin_of(&base_url).to_string(),
            configured => configured.to_string(),
        };

        Ok(Self {
            site_url,
            base_url,
            request_timeout: secs_or(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT),
            notification_poll: secs_or(config.notification_poll_secs, DEFAULT_NOTIFICATION_POLL),
            session_path,
            log_dir,
        })
    }
}

/// `scheme://host[:port]` part of an absolute URL.
fn origin_of(url: &str) -> &str {
    let after_scheme = url.find("://").map_or(0, |i| i + 3);
    match url[after_scheme..].find('/') {
        Some(path_start) => &url[..after_scheme + path_start],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> AppPaths {
        AppPaths {
            config_path: PathBuf::from("/data/config.toml"),
            session_path: PathBuf::from("/data/session.json"),
            logs_dir: PathBuf::from("/data/logs"),
        }
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let mut config = AppConfig::empty();
        config.api_base_url = "https://api.example.com/crypto-backend/".into();

        let settings = ApiSettings::from_config(&config, &paths()).unwrap();
        assert_eq!(settings.base_url, "https://api.example.com/crypto-backend");
        assert_eq!(settings.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(settings.notification_poll, DEFAULT_NOTIFICATION_POLL);
        assert_eq!(settings.session_path, PathBuf::from("/data/session.json"));
        assert_eq!(settings.log_dir, None);
        assert_eq!(settings.site_url, "https://api.example.com");
    }

    #[test]
    fn configured_values_win() {
        let config = AppConfig {
            api_base_url: "http://localhost:8080".into(),
            request_timeout_secs: 3,
            notification_poll_secs: 10,
            session_path: PathBuf::from("/tmp/s.json"),
            log_dir: PathBuf::from("/tmp/logs"),
            site_url: "https://coinvest.example/".into(),
        };
        let settings = ApiSettings::from_config(&config, &paths()).unwrap();
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.notification_poll, Duration::from_secs(10));
        assert_eq!(settings.session_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(settings.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(settings.site_url, "https://coinvest.example");
    }

    #[test]
    fn base_url_is_required() {
        assert_eq!(
            ApiSettings::from_config(&AppConfig::empty(), &paths()),
            Err(SettingsError::MissingBaseUrl)
        );
        let mut config = AppConfig::empty();
        config.api_base_url = "api.example.com".into();
        assert!(matches!(
            ApiSettings::from_config(&config, &paths()),
            Err(SettingsError::InvalidBaseUrl(_))
        ));
    }
}
