//! FitLog - Body Metrics and Workout Consistency Tracking
//!
//! Local-first logic behind a fitness client: a body-metrics journal stored
//! as a single document, a workout session log with streak and training
//! minute statistics, and the snap-point state machine of the app's bottom
//! sheet.

pub mod metrics;
pub mod state;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use metrics::{MetricType, MetricsStore};
pub use state::FitnessState;
pub use storage::config::AppConfig;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use workouts::{NewWorkoutSession, WorkoutTracker};
