pub mod config;
pub mod decoder;
pub mod timing;

pub use config::{Compatibility, Config, Labels};
pub use decoder::{Cafe, ScheduleDecoder};
pub use timing::{
    clock::{Clock, FixedClock, SystemClock},
    daily::DayOpeningRule,
    evaluator::{OpeningHoursEvaluator, OpeningStatus},
    schedule::WeeklySchedule,
    time_of_day::TimeOfDay,
    week_day::WeekDay,
};
