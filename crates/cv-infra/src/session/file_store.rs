use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cv_core::{
    ports::{SessionStoreError, SessionStorePort},
    SessionSnapshot,
};
use tokio::fs;
use tracing::debug;

/// Session snapshot kept as a JSON file.
///
/// 会话快照以 JSON 文件保存；文件不存在视为未登录。
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), SessionStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target.
    async fn atomic_write(&self, content: &str) -> Result<(), SessionStoreError> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn load(&self) -> Result<SessionSnapshot, SessionStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionSnapshot::default());
            }
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(SessionSnapshot::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        let content = serde_json::to_string_pretty(snapshot)?;
        self.atomic_write(&content).await?;
        debug!(path = %self.path.display(), "session snapshot saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::UserSession;
    use tempfile::TempDir;

    fn user() -> UserSession {
        serde_json::from_str(
            r#"{"id":7,"full_name":"Jane Doe","email":"jane@example.com","balance":"12.00"}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn missing_file_loads_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_keeps_extra_fields() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));
        let snapshot = SessionSnapshot {
            user: Some(user()),
            admin: None,
        };

        store.save(&snapshot).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, snapshot);
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"balance\""));
        assert!(!dir.path().join("nested").join("session.json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileSessionStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, SessionStoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store
            .save(&SessionSnapshot {
                user: Some(user()),
                admin: None,
            })
            .await
            .unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_empty());
    }
}
