//! Training consistency statistics.
//!
//! Pure functions over a session list. Only completed sessions count towards
//! minutes and streaks.

use chrono::{DateTime, Days, Duration, Local, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::WorkoutSession;

/// Dashboard summary of the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Minutes across all completed sessions
    pub total_minutes: u64,
    /// Minutes in the trailing week
    pub weekly_minutes: u64,
    /// Minutes in the trailing calendar month
    pub monthly_minutes: u64,
    /// Current streak in days
    pub current_streak: u32,
    /// Longest streak ever observed in days
    pub longest_streak: u32,
    /// Number of logged sessions
    pub total_sessions: usize,
    /// Number of completed sessions
    pub completed_sessions: usize,
}

/// Count consecutive days with a completed session, ending at the most
/// recent one.
///
/// The streak is broken (zero) when the most recent completed session is
/// older than yesterday. A session yesterday keeps the streak alive because
/// today's workout may still happen.
pub fn current_streak(sessions: &[WorkoutSession], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = sessions
        .iter()
        .filter(|s| s.completed)
        .map(WorkoutSession::local_date)
        .collect();

    let Some(&most_recent) = days.last() else {
        return 0;
    };

    if (today - most_recent).num_days() > 1 {
        return 0;
    }

    let mut streak = 0;
    let mut day = most_recent;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}

/// Minutes across all completed sessions.
pub fn total_minutes(sessions: &[WorkoutSession]) -> u64 {
    sessions
        .iter()
        .filter(|s| s.completed)
        .map(|s| u64::from(s.duration))
        .sum()
}

/// Minutes across completed sessions strictly after `since`.
pub fn minutes_since(sessions: &[WorkoutSession], since: DateTime<Utc>) -> u64 {
    sessions
        .iter()
        .filter(|s| s.completed && s.date > since)
        .map(|s| u64::from(s.duration))
        .sum()
}

/// Minutes in the trailing seven calendar days.
pub fn weekly_minutes(sessions: &[WorkoutSession], now: DateTime<Local>) -> u64 {
    let week_ago = now
        .checked_sub_days(Days::new(7))
        .unwrap_or_else(|| now - Duration::days(7));
    minutes_since(sessions, week_ago.with_timezone(&Utc))
}

/// Minutes since the same time one calendar month ago.
///
/// Month subtraction clamps to the end of shorter months, so this window is
/// not a fixed number of days.
pub fn monthly_minutes(sessions: &[WorkoutSession], now: DateTime<Local>) -> u64 {
    let month_ago = now
        .checked_sub_months(Months::new(1))
        .unwrap_or_else(|| now - Duration::days(30));
    minutes_since(sessions, month_ago.with_timezone(&Utc))
}
