//! Saving and loading discovery state
//!
//! Three keys are persisted to a string-keyed store: the two map toggles and
//! the flat list of discovered pod positions. Key names are carried over
//! from the original save format so existing saves keep working.
//!
//! A missing or malformed individual key is never an error — it falls back
//! to its default (this is how a save created before the mod existed loads).
//! Store-level I/O failure is surfaced to the caller; retry policy, if any,
//! belongs to the store.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::discovery::DiscoverySet;
use crate::error::TrackerError;
use crate::policy::MapToggles;
use crate::types::PodIdentity;

/// Persisted key for the show-all toggle.
pub const KEY_SHOW_ALL: &str = "showAllTreasuresOnMap";
/// Persisted key for the show-opened toggle.
pub const KEY_SHOW_OPENED: &str = "showOpenedTreasuresOnMap";
/// Persisted key for the discovered pod positions.
pub const KEY_DISCOVERED: &str = "discoveredTreasurePods";

/// String-keyed store the session state is persisted to. The world save
/// system implements this; [`JsonFileStore`] is the bundled file-backed
/// implementation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>, TrackerError>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), TrackerError>;
}

/// Read toggles and the discovered set from the store.
///
/// Each key defaults independently when absent. A key that is present but
/// malformed is logged and treated as absent, never as an error.
pub fn load(store: &impl KeyValueStore) -> Result<(MapToggles, DiscoverySet), TrackerError> {
    let show_all = read_or_default(store, KEY_SHOW_ALL, false)?;
    let show_opened = read_or_default(store, KEY_SHOW_OPENED, true)?;
    let discovered: Vec<PodIdentity> = read_or_default(store, KEY_DISCOVERED, Vec::new())?;

    let toggles = MapToggles {
        show_all,
        show_opened,
    };
    Ok((toggles, discovered.into_iter().collect()))
}

/// Write toggles and the discovered set to the store. All three keys are
/// written unconditionally.
pub fn save(
    store: &mut impl KeyValueStore,
    toggles: MapToggles,
    discovered: &DiscoverySet,
) -> Result<(), TrackerError> {
    store.set(KEY_SHOW_ALL, Value::Bool(toggles.show_all))?;
    store.set(KEY_SHOW_OPENED, Value::Bool(toggles.show_opened))?;
    store.set(KEY_DISCOVERED, serde_json::to_value(discovered.export())?)?;
    Ok(())
}

fn read_or_default<T: serde::de::DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
    default: T,
) -> Result<T, TrackerError> {
    match store.get(key)? {
        Some(value) => match serde_json::from_value(value) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                log::warn!("Malformed persisted value for '{}', using default: {}", key, e);
                Ok(default)
            }
        },
        None => Ok(default),
    }
}

/// Key-value store backed by a single pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: serde_json::Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading existing values if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| TrackerError::Store(format!("Failed to read {}: {}", path.display(), e)))?;
            serde_json::from_str(&content)
                .map_err(|e| TrackerError::Store(format!("Failed to parse {}: {}", path.display(), e)))?
        } else {
            serde_json::Map::new()
        };
        Ok(Self { path, values })
    }

    /// Open the store at the default location (`~/.mapmarkers/state.json`).
    pub fn open_default() -> Result<Self, TrackerError> {
        Self::open(default_path()?)
    }

    /// Write all values back to disk, creating the parent directory if
    /// needed.
    pub fn flush(&self) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    TrackerError::Store(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        let content = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;
        fs::write(&self.path, content)
            .map_err(|e| TrackerError::Store(format!("Failed to write {}: {}", self.path.display(), e)))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, TrackerError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), TrackerError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Default state file path (`~/.mapmarkers/state.json`).
pub fn default_path() -> Result<PathBuf, TrackerError> {
    let home = dirs::home_dir()
        .ok_or_else(|| TrackerError::Store("Could not find home directory".to_string()))?;
    Ok(home.join(".mapmarkers").join("state.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(x: f32) -> PodIdentity {
        PodIdentity::new(x, 2.0, 3.0)
    }

    #[test]
    fn test_load_from_empty_store_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();

        let (toggles, discovered) = load(&store).unwrap();
        assert_eq!(toggles, MapToggles::default());
        assert!(discovered.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        let mut store = JsonFileStore::open(&path).unwrap();

        let toggles = MapToggles {
            show_all: true,
            show_opened: false,
        };
        let discovered: DiscoverySet = [pod(1.0), pod(2.0), pod(3.0)].into_iter().collect();

        save(&mut store, toggles, &discovered).unwrap();
        store.flush().unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let (loaded_toggles, loaded_set) = load(&reopened).unwrap();
        assert_eq!(loaded_toggles, toggles);
        assert_eq!(loaded_set, discovered);
    }

    #[test]
    fn test_malformed_key_falls_back_to_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = JsonFileStore::open(dir.path().join("state.json")).unwrap();

        store.set(KEY_SHOW_ALL, Value::String("yes".to_string())).unwrap();
        store.set(KEY_DISCOVERED, Value::Bool(true)).unwrap();

        let (toggles, discovered) = load(&store).unwrap();
        assert!(!toggles.show_all);
        assert!(toggles.show_opened);
        assert!(discovered.is_empty());
    }

    #[test]
    fn test_open_on_corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, TrackerError::Store(_)));
    }
}
