use thiserror::Error;

use crate::schedule::Weekday;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid time format: {0:?} (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("schedule is missing entries for {}", join_days(.0))]
    IncompleteSchedule(Vec<Weekday>),

    #[error("unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

fn join_days(days: &[Weekday]) -> String {
    days.iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ")
}
