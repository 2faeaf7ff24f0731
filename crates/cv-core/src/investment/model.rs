use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{InvestmentId, UserId};

/// Investment lifecycle status as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestmentStatus {
    Active,
    Completed,
    /// Any status this client does not act upon (pending approval, rejected, ...).
    Other(String),
}

impl From<String> for InvestmentStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<InvestmentStatus> for String {
    fn from(value: InvestmentStatus) -> Self {
        match value {
            InvestmentStatus::Active => "active".to_string(),
            InvestmentStatus::Completed => "completed".to_string(),
            InvestmentStatus::Other(s) => s,
        }
    }
}

/// A user's investment in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub user_id: UserId,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::amount")]
    pub amount_invested: f64,
    #[serde(deserialize_with = "crate::lenient::amount")]
    pub expected_return: f64,
    pub status: InvestmentStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    pub end_date: String,
}

impl Investment {
    /// Parsed maturity time. The backend emits either RFC 3339 or a zoneless
    /// `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        parse_backend_time(&self.end_date)
    }

    pub fn net_profit(&self) -> f64 {
        self.expected_return - self.amount_invested
    }
}

/// RFC 3339 keeps its offset. A bare `YYYY-MM-DD HH:MM:SS` carries no zone and
/// is read as local wall-clock time; an instant skipped by a DST jump yields `None`.
pub(crate) fn parse_backend_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
