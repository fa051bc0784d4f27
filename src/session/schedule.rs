//! Parsing and validation for persisted session schedules.
//!
//! Bookings store `scheduled_date` as `YYYY-MM-DD` and `scheduled_time` as an
//! optional `HH:MM` 24-hour string. Malformed values are a caller contract
//! violation and are rejected, never coerced.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Error type for schedule parsing and window configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Scheduled date is not a valid `YYYY-MM-DD` calendar date
    InvalidDate(String),
    /// Scheduled time is not a valid `HH:MM` 24-hour time
    InvalidTime(String),
    /// Window parameter is negative
    NegativeWindow(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidDate(s) => write!(f, "Invalid scheduled date: {}", s),
            ScheduleError::InvalidTime(s) => write!(f, "Invalid scheduled time: {}", s),
            ScheduleError::NegativeWindow(s) => write!(f, "Invalid join window: {}", s),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// A session's scheduled date and optional start time.
///
/// A missing time means the guide has not confirmed one yet; the session
/// start falls back to midnight of the scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSchedule {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl SessionSchedule {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    /// Parse the persisted string fields of a booking.
    ///
    /// `date` must be `YYYY-MM-DD`; `time`, when present, `HH:MM` (24-hour).
    pub fn parse(date: &str, time: Option<&str>) -> Result<Self, ScheduleError> {
        let parsed_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
            log::warn!("Rejected scheduled date {:?}: {}", date, e);
            ScheduleError::InvalidDate(date.to_string())
        })?;

        let parsed_time = match time {
            Some(t) => Some(NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|e| {
                log::warn!("Rejected scheduled time {:?}: {}", t, e);
                ScheduleError::InvalidTime(t.to_string())
            })?),
            None => None,
        };

        Ok(Self {
            date: parsed_date,
            time: parsed_time,
        })
    }

    /// The instant the session is scheduled to start
    pub fn session_start(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }
}
