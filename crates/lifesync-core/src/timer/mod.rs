mod countdown;
mod stopwatch;

pub use countdown::{
    CountdownTimer, Preset, TimerPhase, TimerState, DEFAULT_TIMER_SECS, MAX_TIMER_SECS,
};
pub use stopwatch::{Stopwatch, StopwatchState};
