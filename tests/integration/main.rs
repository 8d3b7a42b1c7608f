//! Integration test modules.

mod fitness_state_test;
mod sqlite_store_test;
