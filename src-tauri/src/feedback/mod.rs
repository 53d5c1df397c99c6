pub mod types;

pub use types::FeedbackReport;
