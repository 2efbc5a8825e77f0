use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Day of the week. Declaration order is the canonical order (Monday first)
/// and drives both `Ord` and schedule iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// First three letters of the name, e.g. `Mon`.
    pub fn short_label(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                day.name().eq_ignore_ascii_case(needle)
                    || day.short_label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ScheduleError::UnknownWeekday(s.to_string()))
    }
}

/// Opening window for a single day, stored as `HH:MM` strings.
///
/// Serialized as a two element array: `["09:00", "17:00"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow(pub String, pub String);

impl TimeWindow {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self(open.into(), close.into())
    }

    pub fn open(&self) -> &str {
        &self.0
    }

    pub fn close(&self) -> &str {
        &self.1
    }

    /// Checks both ends are canonical `HH:MM` values, open in `[00,24)` and
    /// close in `(00,24]`. Overnight windows (close before open) pass.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let (open_hour, _) = parse_canonical_time(self.open())?;
        let (close_hour, _) = parse_canonical_time(self.close())?;

        if open_hour > 23 {
            return Err(ScheduleError::InvalidTimeFormat(self.open().to_string()));
        }
        if close_hour == 0 {
            return Err(ScheduleError::InvalidTimeFormat(self.close().to_string()));
        }
        Ok(())
    }
}

fn parse_canonical_time(time: &str) -> Result<(u8, u8), ScheduleError> {
    let invalid = || ScheduleError::InvalidTimeFormat(time.to_string());
    let bytes = time.as_bytes();

    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Opening hours for a week. `None` for a day is the explicit closed marker;
/// a day with no entry at all is also treated as closed by readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<Weekday, Option<TimeWindow>>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same window every day of the week.
    pub fn every_day(window: TimeWindow) -> Self {
        Weekday::ALL
            .into_iter()
            .fold(Self::new(), |schedule, day| {
                schedule.with_day(day, Some(window.clone()))
            })
    }

    pub fn with_day(mut self, day: Weekday, window: Option<TimeWindow>) -> Self {
        self.set(day, window);
        self
    }

    pub fn set(&mut self, day: Weekday, window: Option<TimeWindow>) {
        self.0.insert(day, window);
    }

    pub fn window(&self, day: Weekday) -> Option<&TimeWindow> {
        self.0.get(&day).and_then(Option::as_ref)
    }

    pub fn has_entry(&self, day: Weekday) -> bool {
        self.0.contains_key(&day)
    }

    pub fn missing_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| !self.has_entry(*day))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == Weekday::ALL.len()
    }

    /// Entries in canonical day order, missing days included as `None`.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, Option<&TimeWindow>)> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.window(day)))
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        let missing = self.missing_days();
        if !missing.is_empty() {
            return Err(ScheduleError::IncompleteSchedule(missing));
        }
        self.0
            .values()
            .flatten()
            .try_for_each(TimeWindow::validate)
    }
}
