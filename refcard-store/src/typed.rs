//! Typed load/save interfaces over a [`KeyValueStore`].
//!
//! Mapping profiles live under `mapping/<profile_key>` and saved schedules
//! under `schedule/<name>`, each as one JSON document.

use refcard_core::{MappingProfile, SavedSchedule};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const MAPPING_PREFIX: &str = "mapping/";
pub const SCHEDULE_PREFIX: &str = "schedule/";

/// Column mapping persistence, consumed by the mapping engine.
pub trait MappingStore: Send + Sync {
    fn load_mapping(&self, profile_key: &str) -> Result<Option<MappingProfile>, StoreError>;
    fn save_mapping(&self, profile: &MappingProfile) -> Result<(), StoreError>;
    /// Keys of every stored profile, sorted.
    fn list_mappings(&self) -> Result<Vec<String>, StoreError>;
}

/// Saved schedule persistence, consumed by the import orchestrator.
pub trait ScheduleStore: Send + Sync {
    fn save_schedule(&self, schedule: &SavedSchedule) -> Result<(), StoreError>;
    fn load_schedule_by_name(&self, name: &str) -> Result<Option<SavedSchedule>, StoreError>;
    /// Names of every saved schedule, sorted.
    fn list_schedules(&self) -> Result<Vec<String>, StoreError>;
    fn delete_schedule(&self, name: &str) -> Result<bool, StoreError>;
}

fn load_json<T: DeserializeOwned>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StoreError::json(key, e)),
        None => Ok(None),
    }
}

fn save_json<T: Serialize>(
    store: &(impl KeyValueStore + ?Sized),
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let text = serde_json::to_string(value).map_err(|e| StoreError::json(key, e))?;
    store.put(key, &text)
}

fn names_under(
    store: &(impl KeyValueStore + ?Sized),
    prefix: &str,
) -> Result<Vec<String>, StoreError> {
    Ok(store
        .keys(prefix)?
        .into_iter()
        .filter_map(|k| k.strip_prefix(prefix).map(str::to_string))
        .collect())
}

impl<S: KeyValueStore + ?Sized> MappingStore for S {
    fn load_mapping(&self, profile_key: &str) -> Result<Option<MappingProfile>, StoreError> {
        load_json(self, &format!("{MAPPING_PREFIX}{profile_key}"))
    }

    fn save_mapping(&self, profile: &MappingProfile) -> Result<(), StoreError> {
        log::debug!("Saving mapping profile '{}'", profile.profile_key);
        save_json(self, &format!("{MAPPING_PREFIX}{}", profile.profile_key), profile)
    }

    fn list_mappings(&self) -> Result<Vec<String>, StoreError> {
        names_under(self, MAPPING_PREFIX)
    }
}

impl<S: KeyValueStore + ?Sized> ScheduleStore for S {
    fn save_schedule(&self, schedule: &SavedSchedule) -> Result<(), StoreError> {
        log::debug!(
            "Saving schedule '{}' ({} games)",
            schedule.name,
            schedule.games.len()
        );
        save_json(self, &format!("{SCHEDULE_PREFIX}{}", schedule.name), schedule)
    }

    fn load_schedule_by_name(&self, name: &str) -> Result<Option<SavedSchedule>, StoreError> {
        load_json(self, &format!("{SCHEDULE_PREFIX}{name}"))
    }

    fn list_schedules(&self) -> Result<Vec<String>, StoreError> {
        names_under(self, SCHEDULE_PREFIX)
    }

    fn delete_schedule(&self, name: &str) -> Result<bool, StoreError> {
        self.remove(&format!("{SCHEDULE_PREFIX}{name}"))
    }
}
