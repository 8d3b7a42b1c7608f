//! Integration tests for the shared application state.

use chrono::{Days, Local, Utc};
use fitlog::metrics::MetricType;
use fitlog::storage::config::{load_config_from, save_config_to, Units};
use fitlog::storage::AppConfig;
use fitlog::workouts::NewWorkoutSession;
use fitlog::FitnessState;
use tempfile::TempDir;

#[test]
fn test_state_from_saved_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.display.units = Units::Imperial;
    config.storage.database_file = "journal.db".to_string();
    save_config_to(&config, &config_path).unwrap();

    let config = load_config_from(&config_path).unwrap();
    let mut state = FitnessState::open(&config).unwrap();
    assert_eq!(state.units(), Units::Imperial);

    state
        .metrics_mut()
        .append_entry_now(MetricType::Weight, 90.0)
        .unwrap();

    let (value, unit) = state
        .metrics()
        .display_value(MetricType::Weight, state.units())
        .unwrap();
    assert_eq!(unit, "lbs");
    assert!((value - 198.4158).abs() < 1e-3);
    assert!(dir.path().join("journal.db").exists());
}

#[test]
fn test_dashboard_after_a_week_of_training() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    {
        let mut state = FitnessState::open(&config).unwrap();
        let now = Utc::now();
        for n in 0..7 {
            let date = now.checked_sub_days(Days::new(n)).unwrap();
            state
                .workouts_mut()
                .add_session_at(NewWorkoutSession::completed(date, 40, "Strength"), Local::now());
        }
    }

    let state = FitnessState::open(&config).unwrap();
    let summary = state.workouts().summary();

    assert_eq!(summary.total_sessions, 7);
    assert_eq!(summary.total_minutes, 280);
    assert_eq!(summary.current_streak, 7);
    assert_eq!(summary.longest_streak, 7);
    assert_eq!(summary.weekly_minutes, 280);
}
