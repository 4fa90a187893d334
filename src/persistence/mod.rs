pub mod analytics;
mod favorites;
mod saved_filters;
mod store;

use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

pub use analytics::{
    Analytics,
    ANALYTICS_KEY,
};
pub use favorites::{
    Favorites,
    FAVORITES_KEY,
};
pub use saved_filters::{
    SavedFilters,
    STATE_KEY,
};
pub use store::{
    FileStore,
    KeyValueStore,
    MemoryStore,
};

use crate::core::PortalError;

const APP_NAME: &str = "mentor-portal";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), PortalError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    tracing::debug!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, PortalError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::debug!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

/// Reads a JSON value stored under `key`. Missing keys and malformed JSON
/// both come back as `None`.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed value under {key}: {e}");
            None
        }
    }
}

pub fn write_json<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), PortalError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
