use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Time left until an investment matures.
///
/// 到期倒计时。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaturityCountdown {
    Remaining { hours: i64, minutes: i64, seconds: i64 },
    Matured,
}

impl MaturityCountdown {
    /// Countdown from `now` to `end`. Anything at or past `end` is matured.
    pub fn at(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (end - now).num_milliseconds();
        if diff_ms <= 0 {
            return Self::Matured;
        }
        let total_secs = diff_ms / 1000;
        Self::Remaining {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
        }
    }

    pub fn is_matured(&self) -> bool {
        matches!(self, Self::Matured)
    }
}

impl fmt::Display for MaturityCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{hours}h {minutes}m {seconds}s"),
            Self::Matured => f.write_str("MATURED"),
        }
    }
}
