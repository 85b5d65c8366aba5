//! Stopwatch state machine with cumulative laps.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::ticker::Tickable;

/// Serializable view of a [`Stopwatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchState {
    pub elapsed_centiseconds: u64,
    pub running: bool,
    pub laps: Vec<u64>,
}

/// Elapsed-time accumulator advanced in centisecond ticks.
///
/// Laps store the cumulative elapsed time at the moment `lap()` was
/// called, not the split since the previous lap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stopwatch {
    elapsed_cs: u64,
    running: bool,
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_cs(&self) -> u64 {
        self.elapsed_cs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    pub fn snapshot(&self) -> StopwatchState {
        StopwatchState {
            elapsed_centiseconds: self.elapsed_cs,
            running: self.running,
            laps: self.laps.clone(),
        }
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::StopwatchStarted {
            elapsed_cs: self.elapsed_cs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::StopwatchPaused {
            elapsed_cs: self.elapsed_cs,
            at: Utc::now(),
        })
    }

    /// Advance by one centisecond while running.
    pub fn tick(&mut self) -> Option<Event> {
        if self.running {
            self.elapsed_cs += 1;
        }
        None
    }

    /// Record the current elapsed time. Ignored before the first tick.
    pub fn lap(&mut self) -> Option<Event> {
        if self.elapsed_cs == 0 {
            return None;
        }
        self.laps.push(self.elapsed_cs);
        Some(Event::StopwatchLap {
            lap_number: self.laps.len(),
            elapsed_cs: self.elapsed_cs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.elapsed_cs = 0;
        self.laps.clear();
        Some(Event::StopwatchReset { at: Utc::now() })
    }
}

impl Tickable for Stopwatch {
    fn tick(&mut self) -> Option<Event> {
        Stopwatch::tick(self)
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn period(&self) -> Duration {
        Duration::from_millis(10)
    }
}
