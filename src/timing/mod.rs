pub mod clock;
pub mod daily;
pub mod evaluator;
pub mod schedule;
pub mod time_of_day;
pub mod week_day;
