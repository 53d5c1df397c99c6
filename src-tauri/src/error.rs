use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseReviewError {
    #[error("Auth error: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<CourseReviewError> for String {
    fn from(err: CourseReviewError) -> Self {
        err.to_string()
    }
}
