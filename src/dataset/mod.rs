//! Launch-records dataset
//!
//! The in-memory tabular structure the dashboard computes over. Loaded once
//! from CSV at process start, then shared read-only across all chart
//! handlers.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::load;
pub use types::{Dataset, LaunchRecord, SiteSelection};
