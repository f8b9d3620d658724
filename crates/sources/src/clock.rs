//! Current date and time

use chrono::{DateTime, Local, TimeZone};

/// Format used on the panel: `DD.MM.YY HH:MM:SS`
pub const DATETIME_FORMAT: &str = "%d.%m.%y %H:%M:%S";

pub fn collect() -> String {
    format_datetime(&Local::now())
}

pub fn format_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(DATETIME_FORMAT).to_string()
}
