use std::sync::Arc;

use crate::config::Config;
use crate::dataset::JobTable;
use crate::feedback::relay::FeedbackSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The job postings table, loaded once at startup and shared read-only.
    pub dataset: Arc<JobTable>,
    /// Pluggable feedback delivery. Default: FormRelaySink. Falls back to
    /// LogSink when FEEDBACK_RELAY_URL is not configured.
    pub feedback: Arc<dyn FeedbackSink>,
    /// Startup configuration; handlers read everything they need from the
    /// dataset and sink, so this is only consulted at build time.
    #[allow(dead_code)]
    pub config: Config,
}
