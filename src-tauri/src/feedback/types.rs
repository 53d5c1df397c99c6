use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted course review, as sent by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub course_id: String,
    pub course_name: String,
    /// Criterion id to star rating; 0 means the criterion was left unrated.
    pub ratings: BTreeMap<String, u8>,
    pub average_rating: String,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackReport {
    /// Criteria the reviewer left at zero stars.
    pub fn unrated(&self) -> Vec<&str> {
        self.ratings
            .iter()
            .filter(|(_, rating)| **rating == 0)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// One-line description for the log.
    pub fn summary(&self) -> String {
        let course = if self.course_id.is_empty() {
            self.course_name.clone()
        } else {
            format!("{} (#{})", self.course_name, self.course_id)
        };
        format!(
            "{}: average {} over {} criteria, {} unrated, comment {} chars, submitted {}",
            course,
            self.average_rating,
            self.ratings.len(),
            self.unrated().len(),
            self.comment.chars().count(),
            self.timestamp.to_rfc3339()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "courseId": "1",
            "courseName": "React Fundamentals",
            "ratings": {
                "content": 3, "teaching": 4, "materials": 0,
                "interaction": 5, "difficulty": 0, "overall": 3
            },
            "averageRating": "2.5",
            "comment": "Nhiều ví dụ",
            "timestamp": "2026-03-14T09:26:53Z"
        }"#
    }

    #[test]
    fn test_parse_frontend_report() {
        let report: FeedbackReport = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(report.course_id, "1");
        assert_eq!(report.ratings.len(), 6);
        assert_eq!(report.ratings["teaching"], 4);
        assert_eq!(report.average_rating, "2.5");
        assert_eq!(report.timestamp.to_rfc3339(), "2026-03-14T09:26:53+00:00");
    }

    #[test]
    fn test_unrated_criteria() {
        let report: FeedbackReport = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(report.unrated(), vec!["difficulty", "materials"]);
    }

    #[test]
    fn test_summary() {
        let report: FeedbackReport = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            report.summary(),
            "React Fundamentals (#1): average 2.5 over 6 criteria, 2 unrated, comment 11 chars, submitted 2026-03-14T09:26:53+00:00"
        );

        let anonymous = FeedbackReport {
            course_id: String::new(),
            course_name: "Untitled Course".to_string(),
            ..report
        };
        assert!(anonymous.summary().starts_with("Untitled Course: average 2.5"));
    }
}
