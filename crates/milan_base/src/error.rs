//! Error types for birth-detail parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing birth details.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BirthError {
    /// Birth date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(chrono::format::ParseError),
    /// Birth time string is not a valid `HH:MM` clock time.
    InvalidTime(chrono::format::ParseError),
}

impl Display for BirthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(e) => write!(f, "invalid birth date: {e}"),
            Self::InvalidTime(e) => write!(f, "invalid birth time: {e}"),
        }
    }
}

impl Error for BirthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(e) | Self::InvalidTime(e) => Some(e),
        }
    }
}
