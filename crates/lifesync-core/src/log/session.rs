//! Completed-session log.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient_id, lenient_minutes};
use crate::events::Event;
use crate::storage::{IdGenerator, KeyValueStore, PersistedList, SESSIONS_KEY};

/// What kind of block a session records. Serialized as a bare string;
/// unknown strings are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionType {
    #[default]
    Focus,
    Timer,
    Other(String),
}

impl SessionType {
    pub fn as_str(&self) -> &str {
        match self {
            SessionType::Focus => "focus",
            SessionType::Timer => "timer",
            SessionType::Other(s) => s,
        }
    }
}

impl From<String> for SessionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "focus" => SessionType::Focus,
            "timer" => SessionType::Timer,
            _ => SessionType::Other(s),
        }
    }
}

impl From<&str> for SessionType {
    fn from(s: &str) -> Self {
        SessionType::from(s.to_string())
    }
}

impl From<SessionType> for String {
    fn from(t: SessionType) -> Self {
        match t {
            SessionType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged block of productive time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub session_type: SessionType,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub minutes: u64,
    /// RFC 3339 timestamp. May be empty or malformed in stored data.
    #[serde(default)]
    pub date: String,
}

impl Session {
    /// Calendar day of this session in `zone`.
    ///
    /// Full timestamps are converted into `zone`; bare `YYYY-MM-DD` prefixes
    /// are taken as-is. Returns `None` for anything else.
    pub fn day_in<Tz: TimeZone>(&self, zone: &Tz) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.with_timezone(zone).date_naive());
        }
        self.date
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    }
}

/// Input for [`SessionLog::append`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSession {
    pub session_type: SessionType,
    pub minutes: u64,
    /// Defaults to the time of the append.
    pub date: Option<DateTime<Utc>>,
}

impl NewSession {
    pub fn new(session_type: impl Into<SessionType>, minutes: u64) -> Self {
        Self {
            session_type: session_type.into(),
            minutes,
            date: None,
        }
    }

    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

/// Chronological, append-only session log.
#[derive(Debug)]
pub struct SessionLog {
    list: PersistedList<Session>,
    ids: Arc<IdGenerator>,
}

impl SessionLog {
    pub fn load(store: Arc<dyn KeyValueStore>, ids: Arc<IdGenerator>) -> Self {
        let list: PersistedList<Session> = PersistedList::load(store, SESSIONS_KEY);
        for session in list.items() {
            ids.observe(session.id);
        }
        Self { list, ids }
    }

    /// Append a session at the tail. Never fails; a failed write only
    /// costs persistence.
    pub fn append(&mut self, new: NewSession) -> Session {
        let date = new.date.unwrap_or_else(Utc::now);
        let ids = self.ids.clone();
        let session = self.list.update(|items| {
            // Ids written by other handles since our last read.
            for existing in items.iter() {
                ids.observe(existing.id);
            }
            let session = Session {
                id: ids.next_id(),
                session_type: new.session_type,
                minutes: new.minutes,
                date: date.to_rfc3339_opts(SecondsFormat::Millis, true),
            };
            items.push(session.clone());
            session
        });
        tracing::info!(
            id = session.id,
            session_type = %session.session_type,
            minutes = session.minutes,
            "session recorded"
        );
        session
    }

    /// Append the session described by a `SessionCompleted` event.
    /// Other events are ignored.
    pub fn record_completion(&mut self, event: &Event) -> Option<Session> {
        match event {
            Event::SessionCompleted {
                session_type,
                minutes,
                at,
            } => Some(self.append(NewSession {
                session_type: session_type.clone(),
                minutes: *minutes,
                date: Some(*at),
            })),
            _ => None,
        }
    }

    pub fn list(&self) -> &[Session] {
        self.list.items()
    }

    pub fn len(&self) -> usize {
        self.list.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.items().is_empty()
    }

    /// Remove the session with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        self.list.update(|items| {
            let before = items.len();
            items.retain(|s| s.id != id);
            items.len() != before
        })
    }

    pub fn reload(&mut self) {
        self.list.reload();
        for session in self.list.items() {
            self.ids.observe(session.id);
        }
    }
}
