//! # LifeSync Core Library
//!
//! This library provides the core logic for LifeSync, a personal
//! productivity tool. The `lifesync` CLI and the `lifesync-server` HTTP
//! backend are thin layers over the same library.
//!
//! ## Architecture
//!
//! - **Timers**: Countdown and stopwatch state machines. Neither keeps its
//!   own clock; a [`ticker`] drives `tick()` at the machine's period
//! - **Logs**: Sessions, notes and todos persisted as JSON lists in a
//!   key-value store (SQLite in the binaries, memory in tests)
//! - **Stats**: Weekly totals and day streaks computed from the session log
//! - **Config**: TOML configuration with dot-path access
//!
//! ## Key Components
//!
//! - [`CountdownTimer`] and [`Stopwatch`]: timer state machines
//! - [`Repository`]: every persisted collection over one store
//! - [`Config`]: application configuration management
//! - [`Signal`]: completion alert seam

pub mod error;
pub mod events;
pub mod format;
pub mod log;
pub mod repository;
pub mod signal;
pub mod stats;
pub mod storage;
pub mod ticker;
pub mod timer;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use format::ClockFormat;
pub use log::{
    NewSession, Note, NoteBook, Preferences, Session, SessionLog, SessionType, Theme, Todo,
    TodoCounts, TodoList, TodoPatch,
};
pub use repository::Repository;
pub use signal::{RecordingSignal, SilentSignal, Signal, TerminalSignal};
pub use stats::{Dashboard, DayBucket, WeeklySummary};
pub use storage::{Config, KeyValueStore, MemoryStore, SqliteStore};
pub use ticker::{IntervalTicker, ManualTicker, Tickable};
pub use timer::{CountdownTimer, Preset, Stopwatch, StopwatchState, TimerPhase, TimerState};
