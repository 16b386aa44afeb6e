use serde::Serialize;

use super::{time_of_day::TimeOfDay, week_day::WeekDay};

/// Opening window of a single day.
///
/// Equal opening and closing times mean the venue is open 24 hours that day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DayOpeningRule {
    day: WeekDay,
    open_at: TimeOfDay,
    close_at: TimeOfDay,
}

impl DayOpeningRule {
    pub fn new(day: WeekDay, open_at: TimeOfDay, close_at: TimeOfDay) -> Self {
        Self {
            day,
            open_at,
            close_at,
        }
    }

    /// Used when today has no rule.
    pub fn fallback() -> Self {
        Self::new(WeekDay::Monday, TimeOfDay::ZERO, TimeOfDay::ZERO)
    }

    pub fn day(&self) -> WeekDay {
        self.day
    }

    pub fn open_at(&self) -> TimeOfDay {
        self.open_at
    }

    pub fn close_at(&self) -> TimeOfDay {
        self.close_at
    }

    pub fn is_24_hours(&self) -> bool {
        self.open_at == self.close_at
    }

    pub fn closes_overnight(&self) -> bool {
        self.close_at < self.open_at
    }
}
