use chrono::Weekday;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// Listing order used for the weekly detail text. Monday first.
    pub const DISPLAY_ORDER: [WeekDay; 7] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
        WeekDay::Saturday,
        WeekDay::Sunday,
    ];

    /// 0 = Sunday ... 6 = Saturday
    pub fn ordinal(&self) -> u8 {
        match self {
            WeekDay::Sunday => 0,
            WeekDay::Monday => 1,
            WeekDay::Tuesday => 2,
            WeekDay::Wednesday => 3,
            WeekDay::Thursday => 4,
            WeekDay::Friday => 5,
            WeekDay::Saturday => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeekDay::Sunday => "일",
            WeekDay::Monday => "월",
            WeekDay::Tuesday => "화",
            WeekDay::Wednesday => "수",
            WeekDay::Thursday => "목",
            WeekDay::Friday => "금",
            WeekDay::Saturday => "토",
        }
    }

    /// Matches the backend's day tokens, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "sunday" => Some(WeekDay::Sunday),
            "monday" => Some(WeekDay::Monday),
            "tuesday" => Some(WeekDay::Tuesday),
            "wednesday" => Some(WeekDay::Wednesday),
            "thursday" => Some(WeekDay::Thursday),
            "friday" => Some(WeekDay::Friday),
            "saturday" => Some(WeekDay::Saturday),
            _ => None,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            WeekDay::Sunday => WeekDay::Saturday,
            WeekDay::Monday => WeekDay::Sunday,
            WeekDay::Tuesday => WeekDay::Monday,
            WeekDay::Wednesday => WeekDay::Tuesday,
            WeekDay::Thursday => WeekDay::Wednesday,
            WeekDay::Friday => WeekDay::Thursday,
            WeekDay::Saturday => WeekDay::Friday,
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => WeekDay::Sunday,
            Weekday::Mon => WeekDay::Monday,
            Weekday::Tue => WeekDay::Tuesday,
            Weekday::Wed => WeekDay::Wednesday,
            Weekday::Thu => WeekDay::Thursday,
            Weekday::Fri => WeekDay::Friday,
            Weekday::Sat => WeekDay::Saturday,
        }
    }
}
