//! Integration tests for the SQLite document store.

use chrono::{NaiveDate, Utc};
use fitlog::metrics::{MetricType, MetricsStore};
use fitlog::storage::{KeyValueStore, SqliteStore};
use fitlog::workouts::{NewWorkoutSession, WorkoutTracker, SESSIONS_KEY};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_metrics_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fitlog.db");
    let date = NaiveDate::from_ymd_opt(2024, 8, 12).unwrap();

    let before = {
        let storage = Arc::new(SqliteStore::open(&path).unwrap());
        let mut store = MetricsStore::new(storage);
        store
            .append_entry(MetricType::Thigh, 58.5, date, "19:45")
            .unwrap()
            .unwrap();
        store.get_all()
    };

    let storage = Arc::new(SqliteStore::open(&path).unwrap());
    let store = MetricsStore::new(storage);
    let after = store.get_all();

    assert_eq!(after, before);
    let thigh = after.get(MetricType::Thigh).unwrap();
    assert_eq!(thigh.current_value, Some(58.5));
    assert_eq!(thigh.last_updated, Some(date));
}

#[test]
fn test_sessions_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fitlog.db");

    let logged = {
        let storage = Arc::new(SqliteStore::open(&path).unwrap());
        let mut tracker = WorkoutTracker::load(storage);
        let first = tracker.add_session(NewWorkoutSession::completed(Utc::now(), 50, "Swim"));
        let second = tracker.add_session(NewWorkoutSession::incomplete(Utc::now(), 5, "Run"));
        vec![first, second]
    };

    let storage = Arc::new(SqliteStore::open(&path).unwrap());
    assert!(storage.get_item(SESSIONS_KEY).unwrap().is_some());

    let tracker = WorkoutTracker::load(storage);
    assert_eq!(tracker.sessions(), logged.as_slice());
    assert_eq!(tracker.current_streak(), 1);
    assert_eq!(tracker.longest_streak(), 1);
    assert_eq!(tracker.total_minutes(), 50);
}

#[test]
fn test_documents_use_separate_keys() {
    let storage = Arc::new(SqliteStore::open_in_memory().unwrap());

    let mut metrics = MetricsStore::new(storage.clone());
    metrics.append_entry_now(MetricType::Steps, 12_000.0).unwrap();

    let mut tracker = WorkoutTracker::load(storage.clone());
    tracker.add_session(NewWorkoutSession::completed(Utc::now(), 30, "Walk"));

    let keys = storage.keys().unwrap();
    assert_eq!(
        keys,
        vec![
            "@client_metrics",
            "@workout_longest_streak",
            "@workout_sessions",
            "@workout_streak",
        ]
    );
}
