use chrono::NaiveTime;
use log::warn;
use regex::Regex;
use serde::Deserialize;

use crate::timing::{
    daily::DayOpeningRule, schedule::WeeklySchedule, time_of_day::TimeOfDay, week_day::WeekDay,
};

/// One entry of `openingHours` in the backend's cafe payload.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHourResponse {
    pub day_of_week: Option<String>,
    pub opened_at: Option<String>,
    pub closed_at: Option<String>,
}

/// The parts of the cafe payload that matter for opening hours.
/// Every other field is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CafeResponse {
    pub name: String,
    pub opening_hours: Option<Vec<OpeningHourResponse>>,
}

/// In-memory venue record. Rebuilt on every fetch, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cafe {
    pub name: String,
    pub schedule: WeeklySchedule,
}

pub struct ScheduleDecoder {
    // HH:mm with optional seconds and offset, e.g. "09:30+09:00"
    time_regex: Regex,
}

impl ScheduleDecoder {
    pub fn new() -> Self {
        Self {
            time_regex: Regex::new(
                r"^\s*(\d{1,2}):(\d{2})(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?\s*$",
            )
            .expect("time regex is valid"),
        }
    }

    pub fn decode_cafe(&self, json: &str) -> Result<Cafe, serde_json::Error> {
        let response: CafeResponse = serde_json::from_str(json)?;
        let schedule = self.decode(response.opening_hours.as_deref().unwrap_or_default());
        Ok(Cafe {
            name: response.name,
            schedule,
        })
    }

    pub fn decode(&self, opening_hours: &[OpeningHourResponse]) -> WeeklySchedule {
        WeeklySchedule::from_rules(opening_hours.iter().map(|entry| self.to_rule(entry)))
    }

    pub fn to_rule(&self, entry: &OpeningHourResponse) -> DayOpeningRule {
        DayOpeningRule::new(
            self.parse_day(entry.day_of_week.as_deref()),
            self.parse_time(entry.opened_at.as_deref()),
            self.parse_time(entry.closed_at.as_deref()),
        )
    }

    /// Unknown or missing tokens become Monday.
    pub fn parse_day(&self, token: Option<&str>) -> WeekDay {
        let Some(token) = token else {
            return WeekDay::Monday;
        };
        match WeekDay::from_token(token) {
            Some(day) => day,
            None => {
                warn!("Unknown day token '{}', using Monday", token);
                WeekDay::Monday
            }
        }
    }

    /// Keeps the wall clock hour and minute, dropping any offset.
    /// Missing or unparsable values become 00:00.
    pub fn parse_time(&self, value: Option<&str>) -> TimeOfDay {
        let Some(value) = value else {
            return TimeOfDay::ZERO;
        };
        let parsed = self.time_regex.captures(value).and_then(|captures| {
            let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
            let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
            NaiveTime::from_hms_opt(hour, minute, 0)
        });
        match parsed {
            Some(time) => time.into(),
            None => {
                warn!("Could not parse time '{}', using 00:00", value);
                TimeOfDay::ZERO
            }
        }
    }
}

impl Default for ScheduleDecoder {
    fn default() -> Self {
        Self::new()
    }
}
