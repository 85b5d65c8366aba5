use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::log::SessionType;

/// Every state change in the timer and stopwatch produces an Event.
/// Front ends print them; the session log consumes `SessionCompleted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerConfigured {
        configured_secs: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        configured_secs: u32,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. `minutes` is derived from the time
    /// remaining before the final tick.
    SessionCompleted {
        session_type: SessionType,
        minutes: u64,
        at: DateTime<Utc>,
    },
    StopwatchStarted {
        elapsed_cs: u64,
        at: DateTime<Utc>,
    },
    StopwatchPaused {
        elapsed_cs: u64,
        at: DateTime<Utc>,
    },
    StopwatchLap {
        lap_number: usize,
        elapsed_cs: u64,
        at: DateTime<Utc>,
    },
    StopwatchReset {
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::TimerConfigured { at, .. }
            | Event::TimerStarted { at, .. }
            | Event::TimerPaused { at, .. }
            | Event::TimerReset { at, .. }
            | Event::SessionCompleted { at, .. }
            | Event::StopwatchStarted { at, .. }
            | Event::StopwatchPaused { at, .. }
            | Event::StopwatchLap { at, .. }
            | Event::StopwatchReset { at } => *at,
        }
    }
}
