use std::sync::Arc;

use serde_json::Value;
use tauri::{AppHandle, Wry};
use tauri_plugin_store::{Store, StoreExt};
use tracing::{info, warn};

use super::config::api_url;
use crate::auth::session::SESSION_STORE;
use crate::auth::{self, AuthClient, SignupProfile};

fn session_store(app: &AppHandle) -> Result<Arc<Store<Wry>>, String> {
    app.store(SESSION_STORE).map_err(|e| {
        warn!("Failed to open session store: {}", e);
        e.to_string()
    })
}

#[tauri::command]
pub async fn login(app: AppHandle, email: String, password: String) -> Result<Value, String> {
    info!("Signing in: {}", email);
    let client = AuthClient::new(&api_url(&app))?;
    let store = session_store(&app)?;
    auth::login(&client, store.as_ref(), &email, &password)
        .await
        .map_err(|e| {
            warn!("Sign-in failed for {}: {}", email, e);
            e.into()
        })
}

#[tauri::command]
pub async fn signup(app: AppHandle, profile: SignupProfile) -> Result<Value, String> {
    info!("Signing up: {}", profile.email);
    let client = AuthClient::new(&api_url(&app))?;
    auth::signup(&client, &profile).await.map_err(|e| {
        warn!("Sign-up failed for {}: {}", profile.email, e);
        e.into()
    })
}

#[tauri::command]
pub fn logout(app: AppHandle) -> Result<(), String> {
    info!("Signing out");
    let store = session_store(&app)?;
    auth::logout(store.as_ref()).map_err(|e| {
        warn!("Failed to clear session: {}", e);
        e.into()
    })
}

#[tauri::command]
pub fn get_current_session(app: AppHandle) -> Result<Option<String>, String> {
    let store = session_store(&app)?;
    let token = auth::current_token(store.as_ref());
    info!("Current session present: {}", token.is_some());
    Ok(token)
}
