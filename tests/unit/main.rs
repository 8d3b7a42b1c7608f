//! Unit test modules.

mod bottom_sheet_test;
mod streak_test;
mod training_minutes_test;
