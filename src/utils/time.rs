use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};

/// Source of "now" for attendance rows.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock shifted to the shop's fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

pub fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
    if !(-12..=14).contains(&hours) {
        return Err(anyhow::anyhow!(
            "UTC offset must be between -12 and +14 hours, got {}",
            hours
        ));
    }
    FixedOffset::east_opt(hours * 3600)
        .ok_or_else(|| anyhow::anyhow!("Invalid UTC offset: {} hours", hours))
}

pub fn format_date(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format("%Y-%m-%d").to_string()
}

pub fn format_time(datetime: &DateTime<FixedOffset>) -> String {
    datetime.format("%H:%M:%S").to_string()
}

#[cfg(test)]
pub mod testing {
    use super::*;

    pub struct FixedClock(pub DateTime<FixedOffset>);

    impl FixedClock {
        pub fn at(rfc3339: &str) -> Self {
            Self(DateTime::parse_from_rfc3339(rfc3339).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<FixedOffset> {
            self.0
        }
    }
}
