use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;

/// Preference namespace, doubles as the prefs file stem.
pub const PREFS_NAMESPACE: &str = "jpdb_prefs";
/// Key the JPDB API key is stored under.
pub const KEY_API_KEY: &str = "jpdb_api_key";

/// Persisted key-value preference store.
///
/// Neither operation fails from the caller's perspective: `get` falls back to
/// an empty string and `set` logs storage errors instead of surfacing them.
pub trait PrefStore: Send + Sync {
    /// Stored value for `key`, or an empty string if never set.
    fn get(&self, key: &str) -> String;

    /// Persist `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// Preferences backed by a JSON object file, loaded lazily and written
/// through on every `set`.
pub struct FilePrefs {
    path: PathBuf,
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl FilePrefs {
    /// Store under the platform config directory.
    pub fn new() -> Self {
        let dir = ProjectDirs::from("", "", "rubi")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        Self::at(dir.join(format!("{PREFS_NAMESPACE}.json")))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    fn load(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("prefs file {} is malformed: {e}", self.path.display());
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!("failed to read prefs file {}: {e}", self.path.display());
                HashMap::new()
            }
        }
    }

    fn flush(&self, map: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("failed to create prefs dir {}: {e}", parent.display());
                return;
            }
        }

        let raw = match serde_json::to_string_pretty(map) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to serialize prefs: {e}");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, raw) {
            tracing::warn!("failed to write prefs file {}: {e}", self.path.display());
        }
    }
}

impl Default for FilePrefs {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> String {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let map = cache.get_or_insert_with(|| self.load());
        map.get(key).cloned().unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let map = cache.get_or_insert_with(|| self.load());
        map.insert(key.to_string(), value.to_string());
        self.flush(map);
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Default)]
pub struct MemoryPrefs {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> String {
        let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned().unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_prefs_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rubi-prefs-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn memory_get_after_set_roundtrips() {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.get(KEY_API_KEY), "");

        prefs.set(KEY_API_KEY, "abc123");
        assert_eq!(prefs.get(KEY_API_KEY), "abc123");

        prefs.set(KEY_API_KEY, "");
        assert_eq!(prefs.get(KEY_API_KEY), "");
    }

    #[test]
    fn file_set_overwrites_previous_value() {
        let path = temp_prefs_path("overwrite");
        let prefs = FilePrefs::at(&path);

        prefs.set(KEY_API_KEY, "first");
        prefs.set(KEY_API_KEY, "second");
        assert_eq!(prefs.get(KEY_API_KEY), "second");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_prefs_survive_reload() {
        let path = temp_prefs_path("reload");

        FilePrefs::at(&path).set(KEY_API_KEY, "persisted-key");

        let reopened = FilePrefs::at(&path);
        assert_eq!(reopened.get(KEY_API_KEY), "persisted-key");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_reads_as_unset() {
        let prefs = FilePrefs::at(temp_prefs_path("missing"));
        assert_eq!(prefs.get(KEY_API_KEY), "");
    }

    #[test]
    fn malformed_file_reads_as_unset() {
        let path = temp_prefs_path("malformed");
        fs::write(&path, "not json at all").unwrap();

        let prefs = FilePrefs::at(&path);
        assert_eq!(prefs.get(KEY_API_KEY), "");

        let _ = fs::remove_file(&path);
    }
}
