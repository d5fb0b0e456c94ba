//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use sharecode_core::config::AppConfig;
use sharecode_registry::ShareCodeRegistry;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The share-code registry.
    pub registry: Arc<ShareCodeRegistry>,
    /// Process start time, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates the state, stamping the start time.
    pub fn new(config: Arc<AppConfig>, registry: Arc<ShareCodeRegistry>) -> Self {
        Self {
            config,
            registry,
            started_at: Utc::now(),
        }
    }
}
