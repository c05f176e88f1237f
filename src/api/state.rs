//! Application State
//!
//! Shared state accessible by all API handlers. The dataset is loaded once
//! at startup and injected here; everything downstream reads it through an
//! `Arc` and never mutates it.

use std::sync::Arc;
use std::time::Instant;

use crate::callbacks::CallbackRegistry;
use crate::dataset::Dataset;
use crate::layout::PageLayout;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable launch-record collection
    pub dataset: Arc<Dataset>,
    /// Output-slot -> handler registry
    pub callbacks: Arc<CallbackRegistry>,
    /// The page layout, built once from the dataset
    pub layout: Arc<PageLayout>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the default chart wiring
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        Self::with_registry(dataset, CallbackRegistry::with_defaults(), config)
    }

    /// Create state with a custom callback registry
    pub fn with_registry(
        dataset: Arc<Dataset>,
        registry: CallbackRegistry,
        config: ApiConfig,
    ) -> Self {
        let layout = PageLayout::build(&dataset, &registry);
        Self {
            dataset,
            callbacks: Arc::new(registry),
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
