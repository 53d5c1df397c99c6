use tracing::{info, warn};

use crate::feedback::FeedbackReport;

/// Sink for submitted reviews. Records the report in the log; nothing is persisted.
#[tauri::command]
pub fn submit_feedback(report: FeedbackReport) -> Result<(), String> {
    info!("Feedback received for {}", report.summary());
    let json = serde_json::to_string(&report).map_err(|e| {
        warn!("Failed to serialize feedback report: {}", e);
        e.to_string()
    })?;
    info!("Feedback report: {}", json);
    Ok(())
}
