//! Statistics over the session log.
//!
//! Everything here is computed on demand from a slice of sessions; nothing
//! is cached between calls.

mod streak;
mod weekly;

pub use streak::{streak, streak_local};
pub use weekly::{aggregate, aggregate_local, DayBucket, WeeklySummary, WINDOW_DAYS};

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::format::format_hours;
use crate::log::Session;

/// Everything the weekly dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub weekly: WeeklySummary,
    pub streak_days: u32,
    /// All logged sessions, not only those inside the window.
    pub sessions_tracked: usize,
    /// Window total as hours with one decimal.
    pub total_hours: String,
}

impl Dashboard {
    pub fn build<Tz: TimeZone>(sessions: &[Session], reference: NaiveDate, zone: &Tz) -> Self {
        let weekly = aggregate(sessions, reference, zone);
        let total_hours = format_hours(weekly.total_minutes);
        Self {
            weekly,
            streak_days: streak(sessions, reference, zone),
            sessions_tracked: sessions.len(),
            total_hours,
        }
    }

    pub fn build_local(sessions: &[Session]) -> Self {
        Self::build(sessions, Local::now().date_naive(), &Local)
    }
}
