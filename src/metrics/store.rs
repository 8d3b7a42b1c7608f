//! Persistent body-metric store.
//!
//! The whole metric document is stored under a single key and rewritten on
//! every append, so entry lists and the mirrored current value never get out
//! of step on disk.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use super::defaults::default_metric_data;
use super::types::{Metric, MetricData, MetricEntry, MetricType};
use crate::storage::config::Units;
use crate::storage::kv::{KeyValueStore, StorageError};

/// Storage key for the metric document.
pub const METRICS_KEY: &str = "@client_metrics";

/// Store for body-metric observations.
pub struct MetricsStore {
    storage: Arc<dyn KeyValueStore>,
}

impl MetricsStore {
    /// Create a store over the given storage backend.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Load the metric document.
    ///
    /// Falls back to the default seed (without saving it) when nothing is
    /// stored or the stored document cannot be read.
    pub fn get_all(&self) -> MetricData {
        let raw = match self.storage.get_item(METRICS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No metric document stored, using defaults");
                return default_metric_data();
            }
            Err(e) => {
                tracing::warn!("Failed to read metric document: {}", e);
                return default_metric_data();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to parse metric document: {}", e);
                default_metric_data()
            }
        }
    }

    /// Get a single metric.
    pub fn get_one(&self, metric_type: MetricType) -> Option<Metric> {
        self.get_all().into_metric(metric_type)
    }

    /// Append an entry to a metric and save the whole document.
    ///
    /// Returns `Ok(None)` without writing when the stored document has no
    /// metric of this type. Non-finite values and storage failures are
    /// returned to the caller.
    pub fn append_entry(
        &mut self,
        metric_type: MetricType,
        value: f64,
        date: NaiveDate,
        time: &str,
    ) -> Result<Option<MetricEntry>, MetricsError> {
        // JSON has no NaN or infinity; such a value would make the document unreadable
        if !value.is_finite() {
            return Err(MetricsError::InvalidValue(value));
        }

        let mut data = self.get_all();

        let Some(metric) = data.get_mut(metric_type) else {
            tracing::warn!("Metric '{}' not found, entry not saved", metric_type);
            return Ok(None);
        };

        let entry = MetricEntry::new(value, metric.unit.clone(), date, time);
        metric.push_entry(entry.clone());

        let json = serde_json::to_string(&data)?;
        self.storage.set_item(METRICS_KEY, &json)?;

        tracing::info!(
            "Recorded {} {} {} on {}",
            metric_type,
            value,
            entry.unit,
            date
        );
        Ok(Some(entry))
    }

    /// Append an entry dated now on the local clock.
    pub fn append_entry_now(
        &mut self,
        metric_type: MetricType,
        value: f64,
    ) -> Result<Option<MetricEntry>, MetricsError> {
        let now = Local::now();
        let time = now.format("%H:%M").to_string();
        self.append_entry(metric_type, value, now.date_naive(), &time)
    }

    /// The `limit` most recently appended entries of a metric.
    pub fn latest_entries(&self, metric_type: MetricType, limit: usize) -> Vec<MetricEntry> {
        self.get_one(metric_type)
            .map(|metric| metric.entries.into_iter().take(limit).collect())
            .unwrap_or_default()
    }

    /// Current value of a metric converted for display.
    pub fn display_value(&self, metric_type: MetricType, units: Units) -> Option<(f64, String)> {
        let metric = self.get_one(metric_type)?;
        let value = metric.current_value?;
        Some(units.convert(value, &metric.unit))
    }
}

/// Metric store errors.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Invalid metric value: {0}")]
    InvalidValue(f64),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
