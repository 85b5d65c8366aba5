//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Clock display format
//! - Default countdown duration
//! - Completion notification behaviour
//! - HTTP server bind address
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::format::ClockFormat;
use crate::timer::{CountdownTimer, MAX_TIMER_SECS};

/// Clock display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub format: ClockFormat,
}

/// Default countdown length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_timer_minutes")]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

/// Completion notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell when a countdown expires.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_timer_minutes() -> u32 {
    25
}
fn default_true() -> bool {
    true
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    4000
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            minutes: default_timer_minutes(),
            seconds: 0,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bell: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot replace a whole section".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from `<data_dir>/config.toml`, writing defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if absent.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str::<Config>(&content).map_err(|e| {
                ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to `<data_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// See [`Config::save`].
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("using default config: {e}");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field's type.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Set a config value by key and save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.apply(key, value)?;
        self.save()
    }

    /// Configure `timer` with the default duration. Leaves the timer
    /// untouched when the configured value is out of range.
    pub fn apply_timer_default(&self, timer: &mut CountdownTimer) {
        let total = self.timer.minutes.saturating_mul(60).saturating_add(self.timer.seconds);
        if total == 0 || total > MAX_TIMER_SECS {
            tracing::warn!(total, "configured timer duration out of range, keeping default");
            return;
        }
        timer.configure(self.timer.minutes, self.timer.seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.clock.format, ClockFormat::H24);
        assert_eq!(parsed.server.port, 4000);
        assert_eq!(parsed.timer.minutes, 25);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[clock]\nformat = \"12h\"\n").unwrap();
        assert_eq!(parsed.clock.format, ClockFormat::H12);
        assert_eq!(parsed.server.host, "127.0.0.1");
        assert!(parsed.notifications.bell);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("clock.format").as_deref(), Some("24h"));
        assert_eq!(cfg.get("timer.minutes").as_deref(), Some("25"));
        assert_eq!(cfg.get("notifications.bell").as_deref(), Some("true"));
        assert!(cfg.get("clock.missing_key").is_none());
    }

    #[test]
    fn apply_updates_typed_fields() {
        let mut cfg = Config::default();
        cfg.apply("server.port", "8080").unwrap();
        cfg.apply("notifications.bell", "false").unwrap();
        cfg.apply("clock.format", "12h").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert!(!cfg.notifications.bell);
        assert_eq!(cfg.clock.format, ClockFormat::H12);
    }

    #[test]
    fn apply_rejects_unknown_keys_and_bad_values() {
        let mut cfg = Config::default();
        assert!(cfg.apply("server.nonexistent", "1").is_err());
        assert!(cfg.apply("", "1").is_err());
        assert!(cfg.apply("notifications.bell", "not_a_bool").is_err());
        assert!(cfg.apply("server.port", "99999").is_err());
        assert!(cfg.apply("clock.format", "13h").is_err());
        assert!(cfg.apply("server", "x").is_err());
        assert_eq!(cfg.server.port, 4000);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.timer.minutes, 25);
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.apply("timer.minutes", "45").unwrap();
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().timer.minutes, 45);
    }

    #[test]
    fn load_from_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer\nminutes = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn countdown_uses_configured_duration() {
        let mut cfg = Config::default();
        cfg.timer.minutes = 5;
        cfg.timer.seconds = 30;
        let mut timer = CountdownTimer::default();
        cfg.apply_timer_default(&mut timer);
        assert_eq!(timer.remaining_secs(), 330);

        cfg.timer.minutes = 90;
        let mut timer = CountdownTimer::default();
        cfg.apply_timer_default(&mut timer);
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }
}
