//! Default metric document used before anything has been saved.

use chrono::NaiveDate;

use super::types::{Metric, MetricData, MetricEntry, MetricType};

/// Display metadata for a metric type: name, unit, icon, color.
pub fn metadata(metric_type: MetricType) -> (&'static str, &'static str, &'static str, &'static str) {
    match metric_type {
        MetricType::Weight => ("Weight", "kg", "scale-outline", "#4CAF50"),
        MetricType::Chest => ("Chest", "cm", "body-outline", "#2196F3"),
        MetricType::Shoulders => ("Shoulders", "cm", "body-outline", "#9C27B0"),
        MetricType::Waist => ("Waist", "cm", "resize-outline", "#FF9800"),
        MetricType::Thigh => ("Thigh", "cm", "walk-outline", "#795548"),
        MetricType::Hip => ("Hip", "cm", "ellipse-outline", "#E91E63"),
        MetricType::BodyFat => ("Body Fat", "%", "analytics-outline", "#F44336"),
        MetricType::Bicep => ("Bicep", "cm", "barbell-outline", "#3F51B5"),
        MetricType::WaterIntake => ("Water Intake", "L", "water-outline", "#00BCD4"),
        MetricType::Steps => ("Steps", "steps", "footsteps-outline", "#8BC34A"),
    }
}

/// Sample observations, oldest first: (date, time, value).
fn samples(metric_type: MetricType) -> &'static [((i32, u32, u32), &'static str, f64)] {
    match metric_type {
        MetricType::Weight => &[
            ((2024, 1, 1), "08:00", 82.5),
            ((2024, 1, 15), "08:05", 81.8),
            ((2024, 2, 1), "07:55", 80.9),
        ],
        MetricType::Chest => &[((2024, 1, 1), "08:10", 102.0)],
        MetricType::Waist => &[((2024, 1, 1), "08:12", 91.0), ((2024, 2, 1), "08:02", 89.5)],
        MetricType::BodyFat => &[((2024, 1, 1), "08:15", 24.0), ((2024, 2, 1), "08:05", 22.8)],
        MetricType::WaterIntake => &[((2024, 2, 1), "20:00", 2.5)],
        MetricType::Steps => &[((2024, 2, 1), "21:30", 8432.0)],
        _ => &[],
    }
}

/// Build an empty metric for a type.
pub fn empty_metric(metric_type: MetricType) -> Metric {
    let (name, unit, icon, color) = metadata(metric_type);
    Metric::new(name, unit, icon, color)
}

/// Build the default seed document covering every metric type.
pub fn default_metric_data() -> MetricData {
    let mut data = MetricData::new();

    for metric_type in MetricType::ALL {
        let mut metric = empty_metric(metric_type);

        for (index, ((year, month, day), time, value)) in samples(metric_type).iter().enumerate() {
            let Some(date) = NaiveDate::from_ymd_opt(*year, *month, *day) else {
                continue;
            };
            metric.push_entry(MetricEntry {
                id: format!("seed-{}-{}", metric_type.as_key(), index + 1),
                value: *value,
                unit: metric.unit.clone(),
                date,
                time: (*time).to_string(),
            });
        }

        data.insert(metric_type, metric);
    }

    data
}
