//! In-app notifications shown in the user dashboard header.

use serde::{Deserialize, Serialize};

/// A single notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Latest notification list plus the unread counter.
///
/// 通知列表与未读数。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationFeed {
    #[serde(default)]
    pub list: Vec<Notification>,
    #[serde(default, deserialize_with = "crate::lenient::count")]
    pub unread_count: u32,
}

impl NotificationFeed {
    pub fn mark_all_read(&mut self) {
        self.unread_count = 0;
        for notification in &mut self.list {
            notification.is_read = true;
        }
    }
}

/// Flags arrive as `true`, `1` or `"1"`.
fn lenient_flag<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        serde_json::Value::String(s) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    })
}
