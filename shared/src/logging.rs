//! Shared logging utilities for consistent tracing output
//!
//! Any process that embeds the estimation board initializes tracing through
//! these helpers so filter syntax and output shape stay uniform.

use chrono::{DateTime, Utc};
use tracing::info;

/// Initialize tracing with the default `info` level.
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Initialize tracing with an explicit base level (`"debug"`, `"trace"`, ...).
///
/// `RUST_LOG` is not consulted; the embedding process decides the level.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let env_filter = format!("estimations={base_level},shared={base_level}");

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &str, reason: &str) {
    info!(
        component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}
