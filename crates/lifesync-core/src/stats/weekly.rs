//! Trailing seven-day minute totals.
//!
//! Days are calendar days in the caller's time zone. The binaries pass
//! `chrono::Local`, so a session logged near midnight UTC can land on a
//! different day depending on where the aggregation runs.

use chrono::{Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::log::Session;

/// Number of days in the window, including the reference day.
pub const WINDOW_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub minutes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    /// Oldest day first, reference day last.
    pub by_day: Vec<DayBucket>,
    pub total_minutes: u64,
}

impl WeeklySummary {
    /// Largest bucket, floored at 1 so it can be used as a divisor.
    pub fn max_minutes(&self) -> u64 {
        self.by_day
            .iter()
            .map(|b| b.minutes)
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

/// Sum session minutes per day for `reference` and the six days before it.
///
/// Sessions outside the window, or whose date cannot be read, are ignored.
pub fn aggregate<Tz: TimeZone>(
    sessions: &[Session],
    reference: NaiveDate,
    zone: &Tz,
) -> WeeklySummary {
    let mut by_day: Vec<DayBucket> = (0..WINDOW_DAYS)
        .rev()
        .filter_map(|back| reference.checked_sub_days(Days::new(back)))
        .map(|date| DayBucket { date, minutes: 0 })
        .collect();

    for session in sessions {
        let Some(day) = session.day_in(zone) else {
            continue;
        };
        if let Some(bucket) = by_day.iter_mut().find(|b| b.date == day) {
            bucket.minutes = bucket.minutes.saturating_add(session.minutes);
        }
    }

    let total_minutes = by_day
        .iter()
        .map(|b| b.minutes)
        .fold(0, u64::saturating_add);
    WeeklySummary {
        by_day,
        total_minutes,
    }
}

/// [`aggregate`] for today in the local time zone.
pub fn aggregate_local(sessions: &[Session]) -> WeeklySummary {
    aggregate(sessions, Local::now().date_naive(), &Local)
}
