use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::errors::OccupancyError;

/// (month, day) pairs treated as public holidays.
const HOLIDAYS: [(u32, u32); 7] = [
    (1, 1),
    (2, 14),
    (4, 5),
    (5, 1),
    (6, 1),
    (10, 1),
    (12, 25),
];

/// Months with school holidays or festival travel.
const PEAK_MONTHS: [u32; 6] = [1, 2, 7, 8, 10, 12];

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Normalizes a flight date to a calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times and naive date-times. The day is
/// the one written in the input: an offset is never applied, so the time of
/// day can not move the result to a neighbouring date.
pub fn parse_flight_date(raw: &str) -> Result<NaiveDate, OccupancyError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|date_time| date_time.date())
        .ok_or_else(|| OccupancyError::InvalidFlightDate(raw.to_string()))
}

/// Calendar signals that push occupancy up for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemandProfile {
    pub weekend: bool,
    pub holiday: bool,
    pub peak_season: bool,
}

impl DemandProfile {
    pub fn for_date(date: NaiveDate) -> Self {
        DemandProfile {
            weekend: is_weekend(date),
            holiday: is_holiday(date),
            peak_season: is_peak_season(date),
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_holiday(date: NaiveDate) -> bool {
    HOLIDAYS.contains(&(date.month(), date.day()))
}

pub fn is_peak_season(date: NaiveDate) -> bool {
    PEAK_MONTHS.contains(&date.month())
}
