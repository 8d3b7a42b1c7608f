//! Application state shared by screens.
//!
//! Owns both stores over one storage backend. Screens receive a reference to
//! this holder instead of looking state up from a global.

use std::sync::Arc;

use crate::metrics::MetricsStore;
use crate::storage::config::{AppConfig, Units};
use crate::storage::database::SqliteStore;
use crate::storage::kv::{KeyValueStore, StorageError};
use crate::workouts::WorkoutTracker;

/// Explicit holder for the metric store and the workout tracker.
pub struct FitnessState {
    metrics: MetricsStore,
    workouts: WorkoutTracker,
    units: Units,
}

impl FitnessState {
    /// Build state over an existing storage backend.
    pub fn new(storage: Arc<dyn KeyValueStore>, units: Units) -> Self {
        let metrics = MetricsStore::new(Arc::clone(&storage));
        let workouts = WorkoutTracker::load(storage);

        Self {
            metrics,
            workouts,
            units,
        }
    }

    /// Open the SQLite document store named by the configuration.
    pub fn open(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = SqliteStore::open(&config.database_path())?;
        Ok(Self::new(Arc::new(storage), config.display.units))
    }

    /// Body metric store.
    pub fn metrics(&self) -> &MetricsStore {
        &self.metrics
    }

    /// Mutable body metric store.
    pub fn metrics_mut(&mut self) -> &mut MetricsStore {
        &mut self.metrics
    }

    /// Workout tracker.
    pub fn workouts(&self) -> &WorkoutTracker {
        &self.workouts
    }

    /// Mutable workout tracker.
    pub fn workouts_mut(&mut self) -> &mut WorkoutTracker {
        &mut self.workouts
    }

    /// Display unit preference.
    pub fn units(&self) -> Units {
        self.units
    }
}
