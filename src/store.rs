// src/store.rs
//
// Local preference store: the style config and recent lookups, each kept as a
// JSON blob under a fixed key. Every read/write is best-effort; failures are
// logged and replaced by defaults, never surfaced.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::{
    config::{
        consts::{MAX_HISTORY_ITEMS, OVERLAY_CONFIG_KEY, SEARCH_HISTORY_KEY, STORE_DIR},
        options::StyleConfig,
    },
    core::net::CharacterQuery,
    error::{Error, Result},
};

/// Minimal string key/value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(STORE_DIR)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(Error::Storage(format!(
                "Path exists but is not a directory: {}", self.dir.display())));
        }
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory backend; handy for tests and throwaway sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(s!(key), s!(value));
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub region: String,
    pub realm: String,
    pub name: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl SearchEntry {
    pub fn same_character(&self, query: &CharacterQuery) -> bool {
        self.region == query.region && self.realm == query.realm && self.name == query.name
    }

    pub fn query(&self) -> CharacterQuery {
        CharacterQuery::new(self.region.clone(), self.realm.clone(), self.name.clone())
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Style config + search history on top of any `KeyValueStore`.
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved config, or the default when nothing usable is stored.
    pub fn load_config(&self) -> StyleConfig {
        match self.read_json::<StyleConfig>(OVERLAY_CONFIG_KEY) {
            Some(cfg) => {
                logd!("Store: Loaded overlay config");
                cfg
            }
            None => StyleConfig::default(),
        }
    }

    pub fn save_config(&mut self, config: &StyleConfig) {
        self.write_json(OVERLAY_CONFIG_KEY, config);
    }

    /// Most-recent first. Empty when nothing usable is stored.
    pub fn history(&self) -> Vec<SearchEntry> {
        self.read_json::<Vec<SearchEntry>>(SEARCH_HISTORY_KEY).unwrap_or_default()
    }

    /// Record a lookup stamped with the current time.
    pub fn add_to_history(&mut self, query: &CharacterQuery) {
        self.add_to_history_at(query, now_millis());
    }

    /// Drop any entry for the same character, put the new one first, keep 10.
    pub fn add_to_history_at(&mut self, query: &CharacterQuery, timestamp: u64) {
        let entry = SearchEntry {
            region: query.region.clone(),
            realm: query.realm.clone(),
            name: query.name.clone(),
            timestamp,
        };

        let mut updated = Vec::with_capacity(MAX_HISTORY_ITEMS);
        updated.push(entry);
        updated.extend(self.history().into_iter().filter(|e| !e.same_character(query)));
        updated.truncate(MAX_HISTORY_ITEMS);

        logd!("Store: History → {} entr(ies), newest {}-{}-{}",
            updated.len(), query.region, query.realm, query.name);
        self.write_json(SEARCH_HISTORY_KEY, &updated);
    }

    fn read_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let text = match self.store.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                loge!("Store: Read {} failed: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(v) => Some(v),
            Err(e) => {
                loge!("Store: Corrupt {} ({}), using default", key, e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let text = match serde_json::to_string(value) {
            Ok(t) => t,
            Err(e) => {
                loge!("Store: Serialize {} failed: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(key, &text) {
            loge!("Store: Write {} failed: {}", key, e);
        }
    }
}
