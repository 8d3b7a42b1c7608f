//! Body metrics module.
//!
//! Tracks body measurements and daily health figures:
//! - Weight, body fat and circumference measurements
//! - Water intake and step counts
//!
//! Each metric keeps its full entry history, newest first.

pub mod defaults;
pub mod store;
pub mod types;

pub use defaults::default_metric_data;
pub use store::{MetricsError, MetricsStore, METRICS_KEY};
pub use types::{Metric, MetricData, MetricEntry, MetricType};
