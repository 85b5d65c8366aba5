//! Integration tests for the session log and the statistics built on it.
//!
//! Covers the path from a finished countdown through the session log into
//! weekly totals and streaks, over both storage backends.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use lifesync_core::stats::{aggregate, streak, Dashboard};
use lifesync_core::storage::KeyValueStore;
use lifesync_core::{
    CountdownTimer, ManualTicker, NewSession, Repository, Session, SessionType, SilentSignal,
    SqliteStore,
};
use proptest::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_completed_countdown_lands_in_todays_bucket() {
    let mut repo = Repository::in_memory();
    let mut timer = CountdownTimer::new(Arc::new(SilentSignal));
    timer.configure(0, 3);
    timer.start();

    let events = ManualTicker::new().advance(&mut timer, 10);
    assert_eq!(events.len(), 1);
    let session = repo.sessions.record_completion(&events[0]).unwrap();
    assert_eq!(session.session_type, SessionType::Timer);

    let summary = repo.weekly();
    assert_eq!(summary.by_day.len(), 7);
    assert_eq!(summary.total_minutes, session.minutes);
    assert_eq!(repo.streak(), 1);
}

#[test]
fn test_week_of_sessions_on_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifesync.db");
    let reference = day(2024, 1, 7);

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_at(&path).unwrap());
        let mut repo = Repository::open(store);
        for (back, minutes) in [(0u64, 30u64), (0, 15), (1, 60), (2, 25), (4, 50), (9, 120)] {
            let date = reference - Days::new(back);
            let at = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
            repo.sessions
                .append(NewSession::new(SessionType::Focus, minutes).at(at));
        }
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_at(&path).unwrap());
    let repo = Repository::open(store);
    let sessions = repo.sessions.list();
    assert_eq!(sessions.len(), 6);

    let summary = aggregate(sessions, reference, &Utc);
    let minutes: Vec<u64> = summary.by_day.iter().map(|b| b.minutes).collect();
    assert_eq!(minutes, vec![0, 0, 50, 0, 25, 60, 45]);
    assert_eq!(summary.total_minutes, 180);

    assert_eq!(streak(sessions, reference, &Utc), 3);

    let dashboard = Dashboard::build(sessions, reference, &Utc);
    assert_eq!(dashboard.sessions_tracked, 6);
    assert_eq!(dashboard.total_hours, "3.0");
}

#[test]
fn test_sessions_written_by_older_clients_are_tolerated() {
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    store
        .set(
            "lifesync-sessions",
            r#"[
                {"id": 1704103200000.5, "type": "focus", "minutes": "30", "date": "2024-01-01T10:00:00.000Z"},
                {"id": 1704103300000, "minutes": -10, "date": "2024-01-01T11:00:00.000Z"},
                {"id": 1704103400000, "type": "reading", "date": "2024-01-01T12:00:00.000Z"}
            ]"#,
        )
        .unwrap();

    let mut repo = Repository::open(store);
    assert_eq!(repo.sessions.len(), 3);
    let summary = aggregate(repo.sessions.list(), day(2024, 1, 1), &Utc);
    assert_eq!(summary.total_minutes, 30);

    let next = repo.sessions.append(NewSession::new("focus", 5));
    assert!(next.id > 1_704_103_400_000);
}

#[test]
fn test_corrupt_session_data_starts_empty() {
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    store.set("lifesync-sessions", "{not json").unwrap();

    let mut repo = Repository::open(store.clone());
    assert!(repo.sessions.is_empty());
    repo.sessions.append(NewSession::new("focus", 5));

    let raw = store.get("lifesync-sessions").unwrap().unwrap();
    let stored: Vec<Session> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 1);
}

fn arb_session() -> impl Strategy<Value = Session> {
    (0u64..20, 0u64..500).prop_map(|(back, minutes)| {
        let date = day(2024, 6, 15) - Days::new(back);
        Session {
            id: 0,
            session_type: SessionType::Focus,
            minutes,
            date: format!("{date}T08:00:00.000Z"),
        }
    })
}

proptest! {
    #[test]
    fn prop_weekly_total_matches_in_window_sessions(sessions in prop::collection::vec(arb_session(), 0..40)) {
        let reference = day(2024, 6, 15);
        let summary = aggregate(&sessions, reference, &Utc);

        prop_assert_eq!(summary.by_day.len(), 7);
        prop_assert_eq!(summary.by_day[0].date, reference - Days::new(6));
        prop_assert_eq!(summary.by_day[6].date, reference);

        let bucket_sum: u64 = summary.by_day.iter().map(|b| b.minutes).sum();
        prop_assert_eq!(summary.total_minutes, bucket_sum);

        let window_start = reference - Days::new(6);
        let expected: u64 = sessions
            .iter()
            .filter(|s| s.day_in(&Utc).is_some_and(|d| d >= window_start && d <= reference))
            .map(|s| s.minutes)
            .sum();
        prop_assert_eq!(summary.total_minutes, expected);
    }

    #[test]
    fn prop_streak_never_exceeds_distinct_days(sessions in prop::collection::vec(arb_session(), 0..40)) {
        let reference = day(2024, 6, 15);
        let n = streak(&sessions, reference, &Utc) as usize;
        let distinct: std::collections::HashSet<_> =
            sessions.iter().filter_map(|s| s.day_in(&Utc)).collect();
        prop_assert!(n <= distinct.len());
        if n > 0 {
            prop_assert!(distinct.contains(&reference));
        }
    }
}
