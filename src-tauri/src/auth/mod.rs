//! Authentication against the external course-review API.
//!
//! [`client`] talks HTTP, [`session`] keeps the resulting token under a fixed
//! key in a durable store. The functions here combine the two.

pub mod client;
pub mod session;

use serde_json::Value;
use tracing::info;

pub use client::{access_token, AuthClient, SignupProfile};
pub use session::{clear_token, current_token, save_token, MemorySessionStore, SessionStore};

use crate::error::CourseReviewError;

/// Sign in and remember the returned access token.
///
/// A response without a token is passed through and nothing is stored.
pub async fn login<S: SessionStore + ?Sized>(
    client: &AuthClient,
    store: &S,
    email: &str,
    password: &str,
) -> Result<Value, CourseReviewError> {
    let response = client.signin(email, password).await?;
    match access_token(&response) {
        Some(token) => save_token(store, token)?,
        None => info!("Sign-in response for {} carried no access token", email),
    }
    Ok(response)
}

pub async fn signup(client: &AuthClient, profile: &SignupProfile) -> Result<Value, CourseReviewError> {
    let response = client.signup(profile).await?;
    info!("Registered account for {}", profile.email);
    Ok(response)
}

pub fn logout<S: SessionStore + ?Sized>(store: &S) -> Result<(), CourseReviewError> {
    clear_token(store)
}
