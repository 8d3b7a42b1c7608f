//! Workout session types.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier, ordered by creation time
    pub id: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Duration in minutes
    pub duration: u32,
    /// Free-text session label (e.g. "Strength", "Yoga")
    #[serde(rename = "type")]
    pub session_type: String,
    /// Whether the session was finished
    pub completed: bool,
}

impl WorkoutSession {
    /// Calendar date of the session on the local clock.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}

/// A session that has not been logged yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutSession {
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Duration in minutes
    pub duration: u32,
    /// Free-text session label
    pub session_type: String,
    /// Whether the session was finished
    pub completed: bool,
}

impl NewWorkoutSession {
    /// A completed session.
    pub fn completed(date: DateTime<Utc>, duration: u32, session_type: impl Into<String>) -> Self {
        Self {
            date,
            duration,
            session_type: session_type.into(),
            completed: true,
        }
    }

    /// A session that was started but not finished.
    pub fn incomplete(date: DateTime<Utc>, duration: u32, session_type: impl Into<String>) -> Self {
        Self {
            completed: false,
            ..Self::completed(date, duration, session_type)
        }
    }

    /// Assign a fresh identifier.
    pub fn into_session(self) -> WorkoutSession {
        WorkoutSession {
            id: Uuid::now_v7().to_string(),
            date: self.date,
            duration: self.duration,
            session_type: self.session_type,
            completed: self.completed,
        }
    }
}
