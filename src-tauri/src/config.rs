//! Backend preferences and their defaults.

use url::Url;

use crate::error::CourseReviewError;

/// Store file holding user preferences.
pub const PREFERENCES_STORE: &str = "preferences.json";

/// Preference key for the authentication server base URL.
pub const API_URL_KEY: &str = "api_url";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// The configured API URL, or the default when unset or blank.
pub fn resolve_api_url(stored: Option<&str>) -> String {
    stored
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// Check a user-entered API URL before it is stored.
///
/// Blank input means "use the default" and yields `None`. Anything else must be
/// an absolute `http` or `https` URL.
pub fn normalize_api_url(raw: &str) -> Result<Option<String>, CourseReviewError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = Url::parse(trimmed)
        .map_err(|e| CourseReviewError::Config(format!("Invalid API URL '{}': {}", trimmed, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(Some(trimmed.to_string())),
        other => Err(CourseReviewError::Config(format!(
            "API URL must use http or https, not '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_url() {
        assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_api_url(Some("   ")), DEFAULT_API_URL);
        assert_eq!(
            resolve_api_url(Some(" https://reviews.example.edu/api ")),
            "https://reviews.example.edu/api"
        );
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(normalize_api_url("  ").unwrap(), None);
        assert_eq!(
            normalize_api_url(" http://10.0.0.5:8080 ").unwrap().as_deref(),
            Some("http://10.0.0.5:8080")
        );

        let err = normalize_api_url("localhost 8080").unwrap_err();
        assert!(matches!(err, CourseReviewError::Config(_)), "got {:?}", err);

        let err = normalize_api_url("ftp://files.example.edu").unwrap_err();
        assert!(err.to_string().contains("'ftp'"));
    }
}
