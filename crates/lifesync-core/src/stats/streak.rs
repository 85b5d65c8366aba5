use std::collections::HashSet;

use chrono::{Local, NaiveDate, TimeZone};

use crate::log::Session;

/// Consecutive days with at least one session, counting back from
/// `reference`. The first day without a session ends the count, so a
/// reference day with no sessions gives 0.
pub fn streak<Tz: TimeZone>(sessions: &[Session], reference: NaiveDate, zone: &Tz) -> u32 {
    let active: HashSet<NaiveDate> = sessions.iter().filter_map(|s| s.day_in(zone)).collect();

    let mut count = 0;
    let mut day = reference;
    while active.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

/// [`streak`] ending today in the local time zone.
pub fn streak_local(sessions: &[Session]) -> u32 {
    streak(sessions, Local::now().date_naive(), &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::SessionType;
    use chrono::{Days, Utc};

    fn on(date: NaiveDate) -> Session {
        Session {
            id: 0,
            session_type: SessionType::Focus,
            minutes: 10,
            date: format!("{date}T12:00:00.000Z"),
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn back(n: u64) -> NaiveDate {
        reference() - Days::new(n)
    }

    #[test]
    fn no_sessions_no_streak() {
        assert_eq!(streak(&[], reference(), &Utc), 0);
    }

    #[test]
    fn single_session_today() {
        assert_eq!(streak(&[on(reference())], reference(), &Utc), 1);
    }

    #[test]
    fn gap_stops_the_scan() {
        let sessions = [on(reference()), on(back(1)), on(back(3))];
        assert_eq!(streak(&sessions, reference(), &Utc), 2);
    }

    #[test]
    fn missing_today_means_zero_even_with_history() {
        let sessions = [on(back(1)), on(back(2)), on(back(3))];
        assert_eq!(streak(&sessions, reference(), &Utc), 0);
    }

    #[test]
    fn duplicates_and_order_do_not_matter() {
        let sessions = [on(back(2)), on(reference()), on(back(1)), on(reference()), on(back(1))];
        assert_eq!(streak(&sessions, reference(), &Utc), 3);
    }

    #[test]
    fn streak_can_exceed_a_week() {
        let sessions: Vec<Session> = (0..30).map(|n| on(back(n))).collect();
        assert_eq!(streak(&sessions, reference(), &Utc), 30);
    }
}
