use std::sync::Arc;

use serde_json::Value;
use tauri::{AppHandle, Wry};
use tauri_plugin_store::{Store, StoreExt};
use tracing::{info, warn};

use crate::config::{normalize_api_url, resolve_api_url, API_URL_KEY, PREFERENCES_STORE};

fn preferences(app: &AppHandle) -> Result<Arc<Store<Wry>>, String> {
    app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open preferences: {}", e);
        e.to_string()
    })
}

fn stored_api_url(store: &Store<Wry>) -> Option<String> {
    store
        .get(API_URL_KEY)
        .and_then(|v| v.as_str().map(|s| s.to_string()))
}

/// The authentication server in effect, default included.
#[tauri::command]
pub fn get_api_url(app: AppHandle) -> Result<String, String> {
    let store = preferences(&app)?;
    Ok(resolve_api_url(stored_api_url(&store).as_deref()))
}

/// Store a new authentication server. Blank input reverts to the default.
/// Returns the URL now in effect.
#[tauri::command]
pub fn set_api_url(app: AppHandle, url: String) -> Result<String, String> {
    let normalized = normalize_api_url(&url).map_err(|e| {
        warn!("Rejected API URL: {}", e);
        String::from(e)
    })?;
    let store = preferences(&app)?;
    match &normalized {
        Some(url) => {
            info!("Setting API URL: {}", url);
            store.set(API_URL_KEY, Value::String(url.clone()));
        }
        None => {
            info!("Resetting API URL to default");
            store.delete(API_URL_KEY);
        }
    }
    store.save().map_err(|e| {
        warn!("Failed to save preferences: {}", e);
        e.to_string()
    })?;
    Ok(resolve_api_url(normalized.as_deref()))
}

/// The authentication API base URL for outgoing requests.
pub fn api_url(app: &AppHandle) -> String {
    match app.store(PREFERENCES_STORE) {
        Ok(store) => resolve_api_url(stored_api_url(&store).as_deref()),
        Err(e) => {
            warn!("Failed to open preferences, using default API URL: {}", e);
            resolve_api_url(None)
        }
    }
}
