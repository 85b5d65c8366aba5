mod config;
pub mod database;
mod ids;
mod kv;
mod persisted;

pub use config::{ClockConfig, Config, NotificationsConfig, ServerConfig, TimerConfig};
pub use database::SqliteStore;
pub use ids::IdGenerator;
pub use kv::{KeyValueStore, MemoryStore};
pub use persisted::PersistedList;

use std::path::PathBuf;

/// Storage key for the todo list.
pub const TODOS_KEY: &str = "lifesync-todos";
/// Storage key for notes.
pub const NOTES_KEY: &str = "lifesync-notes";
/// Storage key for completed sessions.
pub const SESSIONS_KEY: &str = "lifesync-sessions";
/// Storage key for the theme preference.
pub const THEME_KEY: &str = "lifesync-theme";

/// Returns the LifeSync data directory, creating it if needed.
///
/// `LIFESYNC_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/lifesync/`, or `~/.config/lifesync-dev/` when
/// `LIFESYNC_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("LIFESYNC_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("LIFESYNC_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("lifesync-dev")
            } else {
                base_dir.join("lifesync")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
