//! Persisted collections: sessions, notes, todos and the theme preference.
//!
//! Each collection loads itself from a [`crate::storage::KeyValueStore`]
//! and writes back after every mutation on a best-effort basis.

mod notes;
mod preferences;
mod session;
mod todos;

pub use notes::{Note, NoteBook};
pub use preferences::{Preferences, Theme};
pub use session::{NewSession, Session, SessionLog, SessionType};
pub use todos::{Todo, TodoCounts, TodoList, TodoPatch, MAX_TASK_LEN};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a loosely-typed minutes value. Numbers are floored, numeric
/// strings are parsed, negatives and everything else count as zero.
pub fn minutes_from_value(value: &Value) -> u64 {
    let as_float = match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return u;
            }
            n.as_f64()
        }
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match as_float {
        Some(f) if f.is_finite() && f > 0.0 => f.floor() as u64,
        _ => 0,
    }
}

pub(crate) fn lenient_minutes<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(minutes_from_value(&value))
}

/// Ids written by older clients may be fractional.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    id.ok_or_else(|| serde::de::Error::custom(format!("invalid id: {value}")))
}
