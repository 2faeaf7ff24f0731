use std::path::PathBuf;

use cv_core::app_dirs::AppDirs;

/// Concrete file locations derived from the platform data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub session_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join("config.toml"),
            session_path: dirs.app_data_root.join("session.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
