use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use tauri::Runtime;
use tauri_plugin_store::Store;
use tracing::{info, warn};

use crate::error::CourseReviewError;

/// Store file holding the signed-in session.
pub const SESSION_STORE: &str = "session.json";

/// Key the access token is kept under.
pub const SESSION_KEY: &str = "user";

/// Durable key/value storage for the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
    fn delete(&self, key: &str) -> bool;

    /// Flush pending writes to durable storage.
    fn persist(&self) -> Result<(), CourseReviewError> {
        Ok(())
    }
}

impl<R: Runtime> SessionStore for Store<R> {
    fn get(&self, key: &str) -> Option<Value> {
        Store::get(self, key)
    }

    fn set(&self, key: &str, value: Value) {
        Store::set(self, key, value);
    }

    fn delete(&self, key: &str) -> bool {
        Store::delete(self, key)
    }

    fn persist(&self) -> Result<(), CourseReviewError> {
        self.save()
            .map_err(|e| CourseReviewError::Session(format!("Failed to save session store: {}", e)))
    }
}

/// In-process store, used when nothing needs to survive a restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key).is_some()
    }
}

/// Keep `token` as the current session. The token is stored JSON-encoded.
pub fn save_token<S: SessionStore + ?Sized>(store: &S, token: &str) -> Result<(), CourseReviewError> {
    let encoded = serde_json::to_string(token)
        .map_err(|e| CourseReviewError::Session(format!("Failed to encode token: {}", e)))?;
    store.set(SESSION_KEY, Value::String(encoded));
    store.persist()?;
    info!("Stored session token");
    Ok(())
}

/// The current session token. A value that does not decode is treated as no session.
pub fn current_token<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    let stored = store.get(SESSION_KEY)?;
    let Some(raw) = stored.as_str() else {
        warn!("Ignoring non-string session value");
        return None;
    };
    match serde_json::from_str::<String>(raw) {
        Ok(token) => Some(token),
        Err(e) => {
            warn!("Ignoring unreadable session value: {}", e);
            None
        }
    }
}

pub fn clear_token<S: SessionStore + ?Sized>(store: &S) -> Result<(), CourseReviewError> {
    if store.delete(SESSION_KEY) {
        info!("Cleared session token");
    }
    store.persist()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(current_token(&store), None);

        save_token(&store, "eyJhbGciOiJIUzI1NiJ9.payload.sig").unwrap();
        assert_eq!(
            current_token(&store).as_deref(),
            Some("eyJhbGciOiJIUzI1NiJ9.payload.sig")
        );
    }

    #[test]
    fn test_token_is_stored_json_encoded() {
        let store = MemorySessionStore::new();
        save_token(&store, "abc").unwrap();
        assert_eq!(store.get(SESSION_KEY), Some(Value::String("\"abc\"".to_string())));
    }

    #[test]
    fn test_clear_token() {
        let store = MemorySessionStore::new();
        save_token(&store, "abc").unwrap();
        clear_token(&store).unwrap();
        assert_eq!(current_token(&store), None);

        // Clearing an empty store is fine
        clear_token(&store).unwrap();
    }

    #[test]
    fn test_corrupted_value_reads_as_absent() {
        let store = MemorySessionStore::new();
        store.set(SESSION_KEY, Value::String("not json".to_string()));
        assert_eq!(current_token(&store), None);

        store.set(SESSION_KEY, serde_json::json!({ "token": "abc" }));
        assert_eq!(current_token(&store), None);
    }
}
