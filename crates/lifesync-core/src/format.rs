//! Display formatting for clock, timer and stopwatch readouts.
//!
//! All functions here are pure. Callers pass the value they want rendered;
//! nothing reads the system clock.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 24-hour or 12-hour wall clock rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

impl ClockFormat {
    pub fn toggled(self) -> Self {
        match self {
            ClockFormat::H24 => ClockFormat::H12,
            ClockFormat::H12 => ClockFormat::H24,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClockFormat::H24 => "24-hour",
            ClockFormat::H12 => "12-hour",
        }
    }
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockFormat::H24 => f.write_str("24h"),
            ClockFormat::H12 => f.write_str("12h"),
        }
    }
}

impl FromStr for ClockFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "24" => Ok(ClockFormat::H24),
            "12h" | "12" => Ok(ClockFormat::H12),
            other => Err(ValidationError::InvalidValue {
                field: "clock_format".into(),
                message: format!("expected '24h' or '12h', got '{other}'"),
            }),
        }
    }
}

/// Countdown readout: `MM:SS`. Minutes are not wrapped at the hour.
pub fn format_timer(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

/// Stopwatch readout: `MM:SS.cc`.
pub fn format_stopwatch(centiseconds: u64) -> String {
    let total_seconds = centiseconds / 100;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let cs = centiseconds % 100;
    format!("{minutes:02}:{seconds:02}.{cs:02}")
}

/// Wall clock readout with zero-padded fields.
pub fn format_clock(time: NaiveTime, format: ClockFormat) -> String {
    match format {
        ClockFormat::H24 => time.format("%H:%M:%S").to_string(),
        ClockFormat::H12 => time.format("%I:%M:%S %p").to_string(),
    }
}

/// Long date, e.g. `Sunday, October 18, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Minutes rendered as hours with one decimal place.
pub fn format_hours(minutes: u64) -> String {
    format!("{:.1}", minutes as f64 / 60.0)
}
