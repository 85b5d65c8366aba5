//! Countdown timer state machine.
//!
//! The timer does not own a clock. A [`crate::ticker`] (or a test) calls
//! `tick()` once per elapsed second while the timer is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> Expired
//!   ^________________reset()_______________|
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::log::SessionType;
use crate::signal::{Signal, SilentSignal};
use crate::ticker::Tickable;

/// Longest countdown that can be configured, in seconds.
pub const MAX_TIMER_SECS: u32 = 3600;

/// Pomodoro default.
pub const DEFAULT_TIMER_SECS: u32 = 25 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Expired,
}

/// Serializable view of a [`CountdownTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub phase: TimerPhase,
    pub configured_seconds: u32,
    pub remaining_seconds: u32,
    pub running: bool,
}

/// Quick-select durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Five,
    Fifteen,
    TwentyFive,
    FortyFive,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Five,
        Preset::Fifteen,
        Preset::TwentyFive,
        Preset::FortyFive,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            Preset::Five => 5,
            Preset::Fifteen => 15,
            Preset::TwentyFive => 25,
            Preset::FortyFive => 45,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.minutes() == minutes)
    }
}

/// Countdown timer.
///
/// Commands return `Some(Event)` when they changed state and `None` when
/// they were ignored.
#[derive(Clone)]
pub struct CountdownTimer {
    configured_secs: u32,
    remaining_secs: u32,
    phase: TimerPhase,
    signal: Arc<dyn Signal>,
}

impl fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("configured_secs", &self.configured_secs)
            .field("remaining_secs", &self.remaining_secs)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(Arc::new(SilentSignal))
    }
}

impl CountdownTimer {
    /// Create an idle 25 minute timer that reports expiry to `signal`.
    pub fn new(signal: Arc<dyn Signal>) -> Self {
        Self {
            configured_secs: DEFAULT_TIMER_SECS,
            remaining_secs: DEFAULT_TIMER_SECS,
            phase: TimerPhase::Idle,
            signal,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn configured_secs(&self) -> u32 {
        self.configured_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// True for the last ten seconds of a running countdown.
    pub fn is_warning(&self) -> bool {
        self.is_running() && self.remaining_secs <= 10
    }

    pub fn snapshot(&self) -> TimerState {
        TimerState {
            phase: self.phase,
            configured_seconds: self.configured_secs,
            remaining_seconds: self.remaining_secs,
            running: self.is_running(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set a custom duration. Ignored while running or when the total is
    /// outside `1..=3600` seconds.
    pub fn configure(&mut self, minutes: u32, seconds: u32) -> Option<Event> {
        if self.is_running() {
            return None;
        }
        let total = minutes.checked_mul(60)?.checked_add(seconds)?;
        if total == 0 || total > MAX_TIMER_SECS {
            tracing::debug!(total, "ignoring out-of-range timer duration");
            return None;
        }
        self.configured_secs = total;
        self.remaining_secs = total;
        self.phase = TimerPhase::Idle;
        Some(Event::TimerConfigured {
            configured_secs: total,
            at: Utc::now(),
        })
    }

    pub fn apply_preset(&mut self, preset: Preset) -> Option<Event> {
        self.configure(preset.minutes(), 0)
    }

    pub fn start(&mut self) -> Option<Event> {
        if self.remaining_secs == 0 || self.is_running() {
            return None;
        }
        self.phase = TimerPhase::Running;
        Some(Event::TimerStarted {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.phase = TimerPhase::Paused;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.phase = TimerPhase::Idle;
        self.remaining_secs = self.configured_secs;
        Some(Event::TimerReset {
            configured_secs: self.configured_secs,
            at: Utc::now(),
        })
    }

    /// Advance by one second. Returns `Some(Event::SessionCompleted)` on the
    /// tick that reaches zero.
    ///
    /// The reported minutes come from the time remaining before this final
    /// tick, so a normal countdown reports `0`.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }

        let before = self.remaining_secs;
        self.remaining_secs = 0;
        self.phase = TimerPhase::Expired;
        self.signal.play_tone();
        self.signal.notify("Timer complete", "Great job! Time's up.");
        tracing::info!(configured_secs = self.configured_secs, "timer expired");
        Some(Event::SessionCompleted {
            session_type: SessionType::Timer,
            minutes: u64::from(before / 60),
            at: Utc::now(),
        })
    }
}

impl Tickable for CountdownTimer {
    fn tick(&mut self) -> Option<Event> {
        CountdownTimer::tick(self)
    }

    fn is_running(&self) -> bool {
        CountdownTimer::is_running(self)
    }

    fn period(&self) -> Duration {
        Duration::from_secs(1)
    }
}
