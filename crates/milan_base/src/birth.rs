//! Birth details: the input boundary of the derivation.
//!
//! The surrounding application supplies an ISO-8601 calendar date and a
//! 24-hour `HH:MM` clock time per profile. Calendar validity (field
//! ranges, leap days) is delegated to chrono; malformed strings are
//! rejected here, never coerced into a default attribute set.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::BirthError;

/// Birth date and local clock time for one person.
///
/// Place of birth is collected by the application but is not an input to
/// the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl BirthDetails {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse from the application's wire strings: `YYYY-MM-DD` and `HH:MM`.
    pub fn parse(date: &str, time: &str) -> Result<Self, BirthError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(BirthError::InvalidDate)?;
        let time = NaiveTime::parse_from_str(time, "%H:%M").map_err(BirthError::InvalidTime)?;
        Ok(Self { date, time })
    }
}

impl std::fmt::Display for BirthDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.time.format("%H:%M"))
    }
}
