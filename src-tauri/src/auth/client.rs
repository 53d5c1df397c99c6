use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::error::CourseReviewError;

/// Registration details sent to `auth/signup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupProfile {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Serialize)]
struct SigninRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the external authentication service.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    pub fn new(base_url: &str) -> Result<Self, CourseReviewError> {
        let mut base_url = Url::parse(base_url).map_err(|e| {
            CourseReviewError::Config(format!("Invalid API URL '{}': {}", base_url, e))
        })?;
        // Join relative to the last path segment, not its parent
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, CourseReviewError> {
        self.base_url
            .join(path)
            .map_err(|e| CourseReviewError::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// POST credentials to `auth/signin`. Returns the server's JSON response.
    pub async fn signin(&self, email: &str, password: &str) -> Result<Value, CourseReviewError> {
        self.post("auth/signin", &SigninRequest { email, password })
            .await
    }

    /// POST a new account to `auth/signup`. Returns the server's JSON response.
    pub async fn signup(&self, profile: &SignupProfile) -> Result<Value, CourseReviewError> {
        self.post("auth/signup", profile).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, CourseReviewError> {
        let url = self.endpoint(path)?;
        info!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", path, status);
            return Err(CourseReviewError::Auth(format!("{} returned {}", path, status)));
        }

        Ok(response.json().await?)
    }
}

/// The `accessToken` field of a sign-in response, if any.
pub fn access_token(response: &Value) -> Option<&str> {
    response
        .get("accessToken")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
}
