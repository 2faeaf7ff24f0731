use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

pub const ADMIN_ROLE: &str = "admin";

/// User returned by the login endpoint.
///
/// Unknown fields are preserved so a load/save round trip never drops data the
/// backend attached to the user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: UserId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Admin returned by the admin login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: UserId,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AdminSession {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Everything the client remembers between runs.
///
/// 客户端持久化的会话快照。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub user: Option<UserSession>,
    #[serde(default)]
    pub admin: Option<AdminSession>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.admin.is_none()
    }
}
