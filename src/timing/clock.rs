use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Source of the current instant.
///
/// Evaluation never reads the system time on its own, callers pass a clock in.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// System time converted to the venue's timezone.
#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

/// Always returns the same instant.
#[derive(Copy, Clone, Debug)]
pub struct FixedClock {
    instant: DateTime<Tz>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.instant
    }
}
