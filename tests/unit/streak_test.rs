//! Unit tests for workout streak tracking.

use chrono::{DateTime, Days, Local, NaiveDate, TimeZone, Utc};
use fitlog::storage::MemoryStore;
use fitlog::workouts::{NewWorkoutSession, WorkoutTracker};
use std::sync::Arc;

/// Reference day used instead of the real clock.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 18).unwrap()
}

fn at(date: NaiveDate, hour: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
        .earliest()
        .unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today() - Days::new(n)
}

fn tracker_with(sessions: Vec<NewWorkoutSession>) -> WorkoutTracker {
    let now = at(today(), 20);
    let mut tracker = WorkoutTracker::load_at(Arc::new(MemoryStore::new()), now);
    for session in sessions {
        tracker.add_session_at(session, now);
    }
    tracker
}

fn completed(date: NaiveDate) -> NewWorkoutSession {
    NewWorkoutSession::completed(at(date, 9).with_timezone(&Utc), 30, "Strength")
}

fn incomplete(date: NaiveDate) -> NewWorkoutSession {
    NewWorkoutSession::incomplete(at(date, 9).with_timezone(&Utc), 30, "Strength")
}

#[test]
fn test_three_consecutive_days() {
    let tracker = tracker_with(vec![
        completed(days_ago(0)),
        completed(days_ago(1)),
        completed(days_ago(2)),
    ]);

    assert_eq!(tracker.current_streak_at(at(today(), 20)), 3);
    assert_eq!(tracker.cached_streak(), 3);
}

#[test]
fn test_gap_of_two_days_breaks_streak() {
    let tracker = tracker_with(vec![completed(days_ago(3))]);
    assert_eq!(tracker.current_streak_at(at(today(), 20)), 0);
}

#[test]
fn test_incomplete_sessions_are_ignored() {
    let tracker = tracker_with(vec![incomplete(days_ago(0)), completed(days_ago(1))]);
    assert_eq!(tracker.current_streak_at(at(today(), 20)), 1);
}

#[test]
fn test_insertion_order_does_not_matter() {
    let tracker = tracker_with(vec![
        completed(days_ago(2)),
        completed(days_ago(0)),
        completed(days_ago(1)),
    ]);
    assert_eq!(tracker.current_streak_at(at(today(), 20)), 3);
}

#[test]
fn test_time_of_day_is_ignored() {
    let now = at(today(), 8);
    let mut tracker = WorkoutTracker::load_at(Arc::new(MemoryStore::new()), now);

    // Late-evening yesterday and early-morning the day before
    tracker.add_session_at(
        NewWorkoutSession::completed(at(days_ago(1), 23).with_timezone(&Utc), 20, "Yoga"),
        now,
    );
    tracker.add_session_at(
        NewWorkoutSession::completed(at(days_ago(2), 1).with_timezone(&Utc), 20, "Yoga"),
        now,
    );

    assert_eq!(tracker.current_streak_at(now), 2);
}

#[test]
fn test_longest_streak_survives_reset() {
    let storage = Arc::new(MemoryStore::new());
    let start = today() - Days::new(30);
    let mut tracker = WorkoutTracker::load_at(storage.clone(), at(start, 20));

    for n in 0..5 {
        let day = start + Days::new(n);
        tracker.add_session_at(completed(day), at(day, 20));
    }
    assert_eq!(tracker.longest_streak(), 5);

    // Reloading weeks later resets the current streak only
    let tracker = WorkoutTracker::load_at(storage, at(today(), 20));
    assert_eq!(tracker.cached_streak(), 0);
    assert_eq!(tracker.longest_streak(), 5);
}
