//! Persistence for mapping profiles and saved schedules.
//!
//! Everything is stored as opaque key -> JSON documents behind
//! [`KeyValueStore`], with an in-memory implementation and a SQLite one
//! (via rusqlite with the bundled feature).

pub mod error;
pub mod kv;
pub mod schema;
pub mod sqlite;
pub mod typed;

pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryStore};
pub use schema::{SchemaError, open_database, open_memory};
pub use sqlite::SqliteStore;
pub use typed::{MAPPING_PREFIX, MappingStore, SCHEDULE_PREFIX, ScheduleStore};
