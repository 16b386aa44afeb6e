use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use log::debug;
use serde::Serialize;

use crate::config::{Compatibility, Config};

use super::{daily::DayOpeningRule, schedule::WeeklySchedule, week_day::WeekDay};

/// Everything the venue screens show about opening hours, computed from one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpeningStatus {
    pub is_open_now: bool,
    pub is_open_24_hours: bool,
    pub summary: String,
    pub quick_summary: String,
}

/// Answers opening hour questions for a schedule at a given instant.
///
/// Nothing here reads the system clock or fails. Missing data degrades to
/// "closed" or to the Monday 00:00 fallback rule.
#[derive(Clone, Debug, Default)]
pub struct OpeningHoursEvaluator {
    config: Config,
}

impl OpeningHoursEvaluator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> OpeningStatus {
        OpeningStatus {
            is_open_now: self.is_open_now(schedule, now),
            is_open_24_hours: self.is_open_24_hours(schedule, now),
            summary: self.formatted_summary(schedule, now),
            quick_summary: self.quick_summary(schedule, now),
        }
    }

    pub fn is_open_now(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> bool {
        self.open_rule(schedule, now).is_some()
    }

    pub fn is_open_24_hours(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> bool {
        match self.config.compatibility {
            Compatibility::Legacy => self.today_or_fallback(schedule, now).is_24_hours(),
            Compatibility::Corrected => schedule
                .rule_for(Self::weekday(now))
                .is_some_and(DayOpeningRule::is_24_hours),
        }
    }

    pub fn formatted_summary(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> String {
        let labels = &self.config.labels;
        if self.is_open_24_hours(schedule, now) {
            return labels.open_24_hours.clone();
        }
        let Some(today) = self.open_rule(schedule, now) else {
            return labels.closed.clone();
        };
        let (open_at, close_at) = (today.open_at(), today.close_at());
        match self.config.compatibility {
            // Matches the text the shipped app renders, e.g. "월 11:0 ~ 1123".
            Compatibility::Legacy => format!(
                "{} {}:{} ~ {}{}",
                today.day().label(),
                open_at.hour(),
                open_at.minute(),
                open_at.hour(),
                close_at.hour()
            ),
            Compatibility::Corrected => {
                format!("{} {} ~ {}", today.day().label(), open_at, close_at)
            }
        }
    }

    /// Short status line for the venue header.
    pub fn quick_summary(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> String {
        let labels = &self.config.labels;
        if self.is_open_24_hours(schedule, now) {
            return labels.open_24_hours.clone();
        }
        let Some(today) = self.open_rule(schedule, now) else {
            return labels.closed.clone();
        };
        format!(
            "{} {} ~ {}",
            labels.open_now,
            today.open_at().padded(),
            today.close_at().padded()
        )
    }

    /// One line per day, Monday first.
    pub fn detail_summary(&self, schedule: &WeeklySchedule) -> String {
        let labels = &self.config.labels;
        WeekDay::DISPLAY_ORDER
            .iter()
            .map(|day| match schedule.rule_for(*day) {
                Some(rule) if rule.is_24_hours() => {
                    format!("{} {}", day.label(), labels.open_24_hours)
                }
                Some(rule) => format!(
                    "{} {} ~ {}",
                    day.label(),
                    rule.open_at().padded(),
                    rule.close_at().padded()
                ),
                None => format!("{} {}", day.label(), labels.day_off),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The rule whose window contains `now`, if any.
    ///
    /// In corrected mode an overnight rule covers its own day after opening and
    /// the next day until closing. Both ends are exclusive.
    fn open_rule(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> Option<DayOpeningRule> {
        let weekday = Self::weekday(now);
        let current = Self::minutes(now);
        let corrected = self.config.compatibility == Compatibility::Corrected;

        if let Some(today) = schedule.rule_for(weekday) {
            if today.is_24_hours() {
                return Some(*today);
            }
            let opening = today.open_at().minutes();
            let closing = today.close_at().minutes();
            let open = if corrected && today.closes_overnight() {
                opening < current
            } else {
                opening < current && current < closing
            };
            if open {
                return Some(*today);
            }
        }

        if !corrected {
            return None;
        }
        schedule
            .rule_for(weekday.previous())
            .filter(|rule| rule.closes_overnight() && current < rule.close_at().minutes())
            .copied()
    }

    fn today_or_fallback(&self, schedule: &WeeklySchedule, now: DateTime<Tz>) -> DayOpeningRule {
        let weekday = Self::weekday(now);
        match schedule.rule_for(weekday) {
            Some(rule) => *rule,
            None => {
                debug!("No opening rule for {:?}, using fallback", weekday);
                DayOpeningRule::fallback()
            }
        }
    }

    fn weekday(now: DateTime<Tz>) -> WeekDay {
        now.weekday().into()
    }

    fn minutes(now: DateTime<Tz>) -> u16 {
        (now.hour() * 60 + now.minute()) as u16
    }
}
