//! Opening-hours helpers. Decisions are made at whole-hour granularity:
//! minutes in both the window and the current time are ignored.

use chrono::{Datelike, NaiveDateTime};
use shared_types::{ScheduleError, Weekday, WeeklySchedule};

/// Hour component of an `HH:MM` string. Only the first two characters are
/// read, so `"09:45"` and `"09"` both give 9.
pub fn parse_hour(time: &str) -> Result<u8, ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat(time.to_string());

    let hour = time
        .get(..2)
        .filter(|h| h.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(invalid)?
        .parse::<u8>()
        .map_err(|_| invalid())?;

    if hour > 24 {
        return Err(invalid());
    }
    Ok(hour)
}

fn parse_current_hour(time: &str) -> Result<u8, ScheduleError> {
    match parse_hour(time)? {
        24 => Err(ScheduleError::InvalidTimeFormat(time.to_string())),
        hour => Ok(hour),
    }
}

/// Whether `schedule` is open on `day` at `time` (`HH:MM`).
///
/// Open means `open_hour <= hour < close_hour`. A window whose close hour is
/// not after its open hour (overnight) is never open. Days that are marked
/// closed, or missing from the schedule, are closed regardless of `time`.
///
/// `24` is only meaningful as a closing hour; as the current time it is
/// rejected with [`ScheduleError::InvalidTimeFormat`].
pub fn is_open(
    schedule: &WeeklySchedule,
    day: Weekday,
    time: &str,
) -> Result<bool, ScheduleError> {
    let Some(window) = schedule.window(day) else {
        return Ok(false);
    };

    let open_at = parse_hour(window.open())?;
    let close_at = parse_hour(window.close())?;
    let current = parse_current_hour(time)?;

    Ok(open_at <= current && current < close_at)
}

/// One `Day:open-close ` segment per weekday, Monday first, each followed by
/// a space (including the last one). Missing days render as `Closed`.
pub fn format_schedule(schedule: &WeeklySchedule) -> String {
    schedule
        .days()
        .map(|(day, window)| match window {
            Some(window) => format!(
                "{}:{}-{} ",
                day.short_label(),
                window.open(),
                window.close()
            ),
            None => format!("{}:Closed ", day.short_label()),
        })
        .collect()
}

pub fn weekday_from_chrono(day: chrono::Weekday) -> Weekday {
    match day {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}

/// Splits a clock reading taken by the caller into the `(day, "HH:MM")`
/// pair the functions above expect.
pub fn day_and_time(now: NaiveDateTime) -> (Weekday, String) {
    (
        weekday_from_chrono(now.weekday()),
        now.format("%H:%M").to_string(),
    )
}
