use chrono::Utc;
use cv_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_matches_now_ms() {
        let clock = SystemClock;
        let ms = clock.now_ms();
        let now = clock.now();
        assert!((now.timestamp_millis() - ms).abs() < 1_000);
    }
}
