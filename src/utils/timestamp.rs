use chrono::{DateTime, Local, TimeZone};

use crate::consts::TIMESTAMP_FORMAT;

/// Current local wall-clock time in the store's timestamp layout
pub(crate) fn now() -> String {
    format_timestamp(&Local::now())
}

pub(crate) fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}
