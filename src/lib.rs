//! # Launchboard
//!
//! Launch Records Dashboard - a small full-stack Rust application that loads
//! a CSV of launch records and serves an interactive single-page dashboard
//! with reactive Plotly charts.
//!
//! ## How it works
//!
//! - The **dataset** is loaded once at startup into an immutable in-memory
//!   collection shared behind an `Arc`.
//! - The **layout** is a declarative description of the page: a site
//!   dropdown, a payload range control, and two chart slots, each declaring
//!   the inputs it subscribes to.
//! - The **callbacks** registry maps each chart slot to a pure handler
//!   function of (dataset, control values) -> figure. The browser reports an
//!   input change, the HTTP host dispatches into the registry, and Plotly.js
//!   re-renders the returned figure.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable record collection
//! - [`charts`]: Plotly figure specifications
//! - [`callbacks`]: output-slot registry and the chart handlers
//! - [`layout`]: the page's view definition
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::api::{serve, ApiConfig, AppState};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(launchboard::dataset::load(Path::new("launches.csv"))?);
//!     let config = ApiConfig::default();
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod callbacks;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use callbacks::{
    CallbackRegistry, ControlValues, PAYLOAD_SCATTER_CHART, PAYLOAD_SLIDER, SITE_DROPDOWN,
    SUCCESS_PIE_CHART,
};

pub use charts::{Figure, Trace};

pub use config::{Config, ConfigError, LoggingConfig};

pub use dataset::{Dataset, LaunchRecord, LoadError, SiteSelection};

pub use layout::PageLayout;
