//! Configuration errors, reported once before any event is handled.

use crate::types::{SelectionMode, YearMonth};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD or YYYY-MM)")]
    InvalidDate(String),

    #[error("minDate {min} is after maxDate {max}")]
    InvertedBounds { min: YearMonth, max: YearMonth },

    #[error("Default date {0} is outside the allowed range")]
    DefaultOutOfBounds(YearMonth),

    #[error("Too many default dates for {mode:?} mode: {count}")]
    TooManyDefaults { mode: SelectionMode, count: usize },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid columns value: {0}")]
    InvalidColumns(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Failed to read events: {0}")]
    Io(#[from] std::io::Error),
}
