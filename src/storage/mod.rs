//! Storage module for documents and configuration.

pub mod config;
pub mod database;
pub mod kv;
pub mod schema;

pub use config::{AppConfig, ConfigError, Units};
pub use database::SqliteStore;
pub use kv::{KeyValueStore, MemoryStore, StorageError};
