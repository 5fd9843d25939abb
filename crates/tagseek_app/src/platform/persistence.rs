use serde::{Deserialize, Serialize};
use tagseek_engine::KeyValueStore;
use tagseek_logging::{seek_error, seek_info, seek_warn};

/// Storage slot holding the tag history.
pub(crate) const HISTORY_KEY: &str = "history";

/// On-disk shape: a bare JSON array of lowercase tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
struct PersistedHistory(Vec<String>);

/// Reads the persisted history. Missing, unreadable or malformed data all
/// load as an empty history.
pub(crate) fn load_history(store: &dyn KeyValueStore) -> Vec<String> {
    let content = match store.get(HISTORY_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            seek_warn!("Failed to read persisted history: {}", err);
            return Vec::new();
        }
    };

    match serde_json::from_str::<PersistedHistory>(&content) {
        Ok(PersistedHistory(tags)) => {
            seek_info!("Loaded {} persisted history tags", tags.len());
            tags
        }
        Err(err) => {
            seek_warn!("Ignoring malformed persisted history: {}", err);
            Vec::new()
        }
    }
}

/// Rewrites the history slot. Failures are logged; the in-memory history
/// stays authoritative.
pub(crate) fn save_history(store: &dyn KeyValueStore, tags: &[String]) {
    let content = match serde_json::to_string(&PersistedHistory(tags.to_vec())) {
        Ok(text) => text,
        Err(err) => {
            seek_error!("Failed to serialize history: {}", err);
            return;
        }
    };

    if let Err(err) = store.set(HISTORY_KEY, &content) {
        seek_error!("Failed to write persisted history: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagseek_engine::{FileKeyValueStore, MemoryKeyValueStore};
    use tempfile::TempDir;

    #[test]
    fn absent_history_loads_empty() {
        let store = MemoryKeyValueStore::new();
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn malformed_history_loads_empty() {
        for raw in ["[\"cats\",", "{\"tags\":[]}", "[1,2]", ""] {
            let store = MemoryKeyValueStore::with_entry(HISTORY_KEY, raw);
            assert!(load_history(&store).is_empty(), "input {raw:?}");
        }
    }

    #[test]
    fn saved_history_is_a_json_array() {
        let store = MemoryKeyValueStore::new();
        save_history(&store, &["cats".to_string(), "dogs".to_string()]);

        assert_eq!(
            store.get(HISTORY_KEY).unwrap().as_deref(),
            Some(r#"["cats","dogs"]"#)
        );
        assert_eq!(load_history(&store), vec!["cats", "dogs"]);
    }

    #[test]
    fn file_store_keeps_history_across_instances() {
        let temp = TempDir::new().unwrap();
        save_history(&FileKeyValueStore::new(temp.path()), &["owls".to_string()]);

        let reopened = FileKeyValueStore::new(temp.path());
        assert_eq!(load_history(&reopened), vec!["owls"]);
    }
}
