pub mod auth;
mod commands;
pub mod config;
mod error;
pub mod feedback;

pub use error::CourseReviewError;
pub use feedback::FeedbackReport;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::auth::login,
            commands::auth::signup,
            commands::auth::logout,
            commands::auth::get_current_session,
            commands::feedback::submit_feedback,
            commands::config::get_api_url,
            commands::config::set_api_url,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
