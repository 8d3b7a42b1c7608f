//! Body metric data types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Kind of body or health measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricType {
    Weight,
    Chest,
    Shoulders,
    Waist,
    Thigh,
    Hip,
    BodyFat,
    Bicep,
    WaterIntake,
    Steps,
}

impl MetricType {
    /// Every metric type, in display order.
    pub const ALL: [MetricType; 10] = [
        MetricType::Weight,
        MetricType::Chest,
        MetricType::Shoulders,
        MetricType::Waist,
        MetricType::Thigh,
        MetricType::Hip,
        MetricType::BodyFat,
        MetricType::Bicep,
        MetricType::WaterIntake,
        MetricType::Steps,
    ];

    /// Document key for this type.
    pub fn as_key(&self) -> &'static str {
        match self {
            MetricType::Weight => "weight",
            MetricType::Chest => "chest",
            MetricType::Shoulders => "shoulders",
            MetricType::Waist => "waist",
            MetricType::Thigh => "thigh",
            MetricType::Hip => "hip",
            MetricType::BodyFat => "bodyFat",
            MetricType::Bicep => "bicep",
            MetricType::WaterIntake => "waterIntake",
            MetricType::Steps => "steps",
        }
    }

    /// Parse an exact document key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_key() == key)
    }

    /// Parse a user-typed name, ignoring case, underscores and hyphens.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|t| t.as_key().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

impl std::str::FromStr for MetricType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown metric type: {}", s))
    }
}

/// A single recorded observation of a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    /// Unique identifier
    pub id: String,
    /// Observed value
    pub value: f64,
    /// Unit the value was recorded in
    pub unit: String,
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Time of day, `HH:MM`
    pub time: String,
}

impl MetricEntry {
    /// Create a new entry with a fresh identifier.
    pub fn new(value: f64, unit: impl Into<String>, date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            value,
            unit: unit.into(),
            date,
            time: time.into(),
        }
    }
}

/// A tracked metric with display metadata and its entry history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Display name
    pub name: String,
    /// Unit for new entries
    pub unit: String,
    /// Icon identifier
    pub icon: String,
    /// Display color (hex)
    pub color: String,
    /// Value of the most recently appended entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    /// Date of the most recently appended entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    /// Entries, newest first by insertion
    #[serde(default)]
    pub entries: Vec<MetricEntry>,
}

impl Metric {
    /// Create an empty metric.
    pub fn new(name: &str, unit: &str, icon: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            current_value: None,
            last_updated: None,
            entries: Vec::new(),
        }
    }

    /// Record an entry as the newest one.
    ///
    /// `current_value` and `last_updated` follow insertion order, so a
    /// backdated entry still becomes the current value.
    pub fn push_entry(&mut self, entry: MetricEntry) {
        self.current_value = Some(entry.value);
        self.last_updated = Some(entry.date);
        self.entries.insert(0, entry);
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&MetricEntry> {
        self.entries.first()
    }
}

/// Every tracked metric keyed by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricData {
    metrics: BTreeMap<MetricType, Metric>,
}

impl MetricData {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a metric by type.
    pub fn get(&self, metric_type: MetricType) -> Option<&Metric> {
        self.metrics.get(&metric_type)
    }

    /// Get a mutable metric by type.
    pub fn get_mut(&mut self, metric_type: MetricType) -> Option<&mut Metric> {
        self.metrics.get_mut(&metric_type)
    }

    /// Insert or replace a metric.
    pub fn insert(&mut self, metric_type: MetricType, metric: Metric) {
        self.metrics.insert(metric_type, metric);
    }

    /// Consume the document, keeping only one metric.
    pub fn into_metric(mut self, metric_type: MetricType) -> Option<Metric> {
        self.metrics.remove(&metric_type)
    }

    /// Check if a metric type is present.
    pub fn contains(&self, metric_type: MetricType) -> bool {
        self.metrics.contains_key(&metric_type)
    }

    /// Iterate metrics in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricType, &Metric)> {
        self.metrics.iter().map(|(t, m)| (*t, m))
    }

    /// Number of metrics present.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Check if no metrics are present.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl<'de> Deserialize<'de> for MetricData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Metric>::deserialize(deserializer)?;
        let mut metrics = BTreeMap::new();

        for (key, metric) in raw {
            match MetricType::from_key(&key) {
                Some(metric_type) => {
                    metrics.insert(metric_type, metric);
                }
                None => tracing::warn!("Dropping unknown metric type '{}' from document", key),
            }
        }

        Ok(Self { metrics })
    }
}
