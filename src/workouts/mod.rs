//! Workout session logging and consistency statistics.

pub mod stats;
pub mod tracker;
pub mod types;

pub use stats::WorkoutSummary;
pub use tracker::{WorkoutTracker, LONGEST_STREAK_KEY, SESSIONS_KEY, STREAK_KEY};
pub use types::{NewWorkoutSession, WorkoutSession};
