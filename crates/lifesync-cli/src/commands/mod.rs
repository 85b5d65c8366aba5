pub mod clock;
pub mod config;
pub mod note;
pub mod session;
pub mod stats;
pub mod stopwatch;
pub mod theme;
pub mod timer;
pub mod todo;

use std::error::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lifesync_core::Repository;

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Repository over the SQLite database in the data directory.
pub(crate) fn open_repository() -> Result<Repository, Box<dyn Error>> {
    Ok(Repository::open_default()?)
}

/// Single-threaded runtime for the commands that run in real time.
pub(crate) fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Rewrite the current terminal line.
pub(crate) fn redraw(line: &str) {
    use std::io::Write;
    let mut out = std::io::stdout();
    let _ = write!(out, "\r{line}\x1b[K");
    let _ = out.flush();
}
