//! Unit tests for training minute totals.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use fitlog::storage::MemoryStore;
use fitlog::workouts::{NewWorkoutSession, WorkoutTracker};
use std::sync::Arc;

fn now() -> DateTime<Local> {
    Local
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(2024, 7, 31)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
        )
        .earliest()
        .unwrap()
}

/// Test helper to create a session a number of days before the reference time.
fn session_days_ago(days: i64, duration: u32, completed: bool) -> NewWorkoutSession {
    let date = (now() - Duration::days(days)).with_timezone(&Utc);
    if completed {
        NewWorkoutSession::completed(date, duration, "Cardio")
    } else {
        NewWorkoutSession::incomplete(date, duration, "Cardio")
    }
}

fn tracker_with(sessions: Vec<NewWorkoutSession>) -> WorkoutTracker {
    let mut tracker = WorkoutTracker::load_at(Arc::new(MemoryStore::new()), now());
    for session in sessions {
        tracker.add_session_at(session, now());
    }
    tracker
}

#[test]
fn test_weekly_excludes_eight_days_ago() {
    let tracker = tracker_with(vec![
        session_days_ago(6, 45, true),
        session_days_ago(8, 45, true),
    ]);

    assert_eq!(tracker.weekly_minutes_at(now()), 45);
    assert_eq!(tracker.total_minutes(), 90);
}

#[test]
fn test_monthly_window() {
    let tracker = tracker_with(vec![
        session_days_ago(1, 30, true),
        session_days_ago(20, 60, true),
        session_days_ago(29, 15, true),
        session_days_ago(31, 90, true),
    ]);

    // July 31 minus one month is June 30: 31 days back is just outside
    assert_eq!(tracker.monthly_minutes_at(now()), 105);
}

#[test]
fn test_incomplete_sessions_do_not_count() {
    let tracker = tracker_with(vec![
        session_days_ago(0, 25, false),
        session_days_ago(2, 35, true),
    ]);

    assert_eq!(tracker.total_minutes(), 35);
    assert_eq!(tracker.weekly_minutes_at(now()), 35);
    assert_eq!(tracker.monthly_minutes_at(now()), 35);
}

#[test]
fn test_empty_log() {
    let tracker = tracker_with(Vec::new());

    let summary = tracker.summary_at(now());
    assert_eq!(summary.total_minutes, 0);
    assert_eq!(summary.weekly_minutes, 0);
    assert_eq!(summary.current_streak, 0);
    assert_eq!(summary.total_sessions, 0);
}
