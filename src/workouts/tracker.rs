//! Workout session log with streak tracking.
//!
//! Sessions, the current streak and the longest streak are persisted under
//! separate keys. The session list is the source of truth: the current
//! streak is recomputed on load and after every completed session, and the
//! longest streak only ever grows.
//!
//! Persistence is best effort. Read failures start from an empty log and
//! write failures are logged, leaving the in-memory state authoritative.

use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::stats::{self, WorkoutSummary};
use super::types::{NewWorkoutSession, WorkoutSession};
use crate::storage::kv::KeyValueStore;

/// Storage key for the session list.
pub const SESSIONS_KEY: &str = "@workout_sessions";
/// Storage key for the cached current streak.
pub const STREAK_KEY: &str = "@workout_streak";
/// Storage key for the longest streak.
pub const LONGEST_STREAK_KEY: &str = "@workout_longest_streak";

/// Session log and consistency statistics.
pub struct WorkoutTracker {
    storage: Arc<dyn KeyValueStore>,
    sessions: Vec<WorkoutSession>,
    streak: u32,
    longest_streak: u32,
}

impl WorkoutTracker {
    /// Load the session log from storage.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::load_at(storage, Local::now())
    }

    /// Load the session log, computing the streak as of `now`.
    pub fn load_at(storage: Arc<dyn KeyValueStore>, now: DateTime<Local>) -> Self {
        let sessions: Vec<WorkoutSession> = read_document(&*storage, SESSIONS_KEY);
        let longest_streak: u32 = read_document(&*storage, LONGEST_STREAK_KEY);

        tracing::debug!("Loaded {} workout sessions", sessions.len());

        let mut tracker = Self {
            storage,
            sessions,
            streak: 0,
            longest_streak,
        };
        tracker.refresh_streak(now);
        tracker
    }

    /// Log a new session.
    pub fn add_session(&mut self, session: NewWorkoutSession) -> WorkoutSession {
        self.add_session_at(session, Local::now())
    }

    /// Log a new session, computing any streak change as of `now`.
    pub fn add_session_at(
        &mut self,
        session: NewWorkoutSession,
        now: DateTime<Local>,
    ) -> WorkoutSession {
        let session = session.into_session();
        self.sessions.push(session.clone());
        self.write_document(SESSIONS_KEY, &self.sessions);

        tracing::info!(
            "Logged {} min {} session (completed: {})",
            session.duration,
            session.session_type,
            session.completed
        );

        if session.completed {
            self.refresh_streak(now);
        }

        session
    }

    /// Recompute the streak cache and raise the longest streak if exceeded.
    fn refresh_streak(&mut self, now: DateTime<Local>) {
        self.streak = self.current_streak_at(now);
        self.write_document(STREAK_KEY, &self.streak);

        if self.streak > self.longest_streak {
            self.longest_streak = self.streak;
            self.write_document(LONGEST_STREAK_KEY, &self.longest_streak);
        }
    }

    fn write_document<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.storage.set_item(key, &json) {
            tracing::warn!("Failed to save {}: {}", key, e);
        }
    }

    /// All logged sessions in insertion order.
    pub fn sessions(&self) -> &[WorkoutSession] {
        &self.sessions
    }

    /// The `limit` most recent sessions by date, newest first.
    pub fn recent_sessions(&self, limit: usize) -> Vec<&WorkoutSession> {
        let mut sessions: Vec<&WorkoutSession> = self.sessions.iter().collect();
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        sessions.truncate(limit);
        sessions
    }

    /// Current streak in days as of now.
    pub fn current_streak(&self) -> u32 {
        self.current_streak_at(Local::now())
    }

    /// Current streak in days as of `now`.
    pub fn current_streak_at(&self, now: DateTime<Local>) -> u32 {
        stats::current_streak(&self.sessions, now.date_naive())
    }

    /// Streak value as of the last load or completed session.
    pub fn cached_streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak ever observed.
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    /// Minutes across all completed sessions.
    pub fn total_minutes(&self) -> u64 {
        stats::total_minutes(&self.sessions)
    }

    /// Minutes in the trailing week.
    pub fn weekly_minutes(&self) -> u64 {
        self.weekly_minutes_at(Local::now())
    }

    /// Minutes in the week before `now`.
    pub fn weekly_minutes_at(&self, now: DateTime<Local>) -> u64 {
        stats::weekly_minutes(&self.sessions, now)
    }

    /// Minutes in the trailing calendar month.
    pub fn monthly_minutes(&self) -> u64 {
        self.monthly_minutes_at(Local::now())
    }

    /// Minutes in the calendar month before `now`.
    pub fn monthly_minutes_at(&self, now: DateTime<Local>) -> u64 {
        stats::monthly_minutes(&self.sessions, now)
    }

    /// Dashboard summary as of now.
    pub fn summary(&self) -> WorkoutSummary {
        self.summary_at(Local::now())
    }

    /// Dashboard summary as of `now`.
    pub fn summary_at(&self, now: DateTime<Local>) -> WorkoutSummary {
        WorkoutSummary {
            total_minutes: self.total_minutes(),
            weekly_minutes: self.weekly_minutes_at(now),
            monthly_minutes: self.monthly_minutes_at(now),
            current_streak: self.current_streak_at(now),
            longest_streak: self.longest_streak,
            total_sessions: self.sessions.len(),
            completed_sessions: self.sessions.iter().filter(|s| s.completed).count(),
        }
    }
}

/// Read and decode a document, falling back to its default on any failure.
fn read_document<T: DeserializeOwned + Default>(storage: &dyn KeyValueStore, key: &str) -> T {
    match storage.get_item(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}", key, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            T::default()
        }
    }
}
