use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::LocatorError;
use crate::util::iss_link::IssPosition;

pub fn timestamp_to_datetime(timestamp: f64) -> Result<DateTime<Utc>, LocatorError> {
    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9) as u32;
    if !secs.is_finite() {
        return Err(LocatorError::Conversion(format!("invalid timestamp {}", timestamp)));
    }
    DateTime::from_timestamp(secs as i64, nanos)
        .ok_or_else(|| LocatorError::Conversion(format!("invalid timestamp {}", timestamp)))
}

/// Three line report, the timestamp shown in the given time zone.
pub fn format_report<Tz>(position: &IssPosition, tz: &Tz) -> Result<String, LocatorError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let when = timestamp_to_datetime(position.get_timestamp())?.with_timezone(tz);
    let coordinate = position.get_position();
    Ok(format!(
        "ISS-Position ({})\nLatitude:  {} ({})\nLongitude: {} ({})",
        when.format("%Y-%m-%d %H:%M:%S"),
        position.get_latitude(),
        coordinate.get_latitude_as_string(),
        position.get_longitude(),
        coordinate.get_longitude_as_string(),
    ))
}
