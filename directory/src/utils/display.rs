//! 12-hour display formatting for opening hours

use shared_types::{TimeWindow, Weekday, WeeklySchedule};

/// Convert 24-hour time to 12-hour format
pub fn convert_to_12_hour_format(time_24: &str) -> String {
    if let Some((hour_str, minute_str)) = time_24.split_once(':') {
        if let Ok(hour) = hour_str.parse::<u32>() {
            let (hour_12, period) = match hour {
                0 | 24 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                13..=23 => (hour - 12, "PM"),
                _ => return time_24.to_string(),
            };

            // Only show minutes if they're not 00
            if minute_str == "00" {
                return format!("{} {}", hour_12, period);
            } else {
                return format!("{}:{} {}", hour_12, minute_str, period);
            }
        }
    }
    time_24.to_string() // Fallback to original if parsing fails
}

/// Format an opening window as a 12-hour range, e.g. `9 AM - 5 PM`
pub fn format_window_12h(window: &TimeWindow) -> String {
    format!(
        "{} - {}",
        convert_to_12_hour_format(window.open()),
        convert_to_12_hour_format(window.close())
    )
}

/// Hours for a single day, `Closed` when there is no window
pub fn format_day_hours(schedule: &WeeklySchedule, day: Weekday) -> String {
    match schedule.window(day) {
        Some(window) => format_window_12h(window),
        None => "Closed".to_string(),
    }
}
