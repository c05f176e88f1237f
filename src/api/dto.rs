//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! The layout and figure types serialize themselves; this module covers the
//! callback query parameters and the health payload.

use serde::{Deserialize, Serialize};

use crate::callbacks::ControlValues;
use crate::dataset::{Dataset, SiteSelection};

/// Query parameters of a callback invocation
///
/// Every parameter is optional: a missing `site` means the sentinel, and
/// missing bounds fall back to the dataset's observed payload extremes,
/// matching the range control's initial value.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    /// Dropdown value ("ALL" or a site identifier)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound
    #[serde(default)]
    pub high: Option<f64>,
}

impl CallbackParams {
    /// Resolve into concrete control values against a dataset
    pub fn into_controls(self, dataset: &Dataset) -> ControlValues {
        let site = self
            .site
            .as_deref()
            .map(SiteSelection::parse)
            .unwrap_or(SiteSelection::All);
        ControlValues {
            site,
            payload_range: (
                self.low.unwrap_or_else(|| dataset.payload_min()),
                self.high.unwrap_or_else(|| dataset.payload_max()),
            ),
        }
    }
}

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Dataset status: "ok"
    pub dataset: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Seconds since server start
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 525.0, 1, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, 0, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults_resolve_to_sentinel_and_extremes() {
        let controls = CallbackParams::default().into_controls(&dataset());
        assert_eq!(controls.site, SiteSelection::All);
        assert_eq!(controls.payload_range, (525.0, 9600.0));
    }

    #[test]
    fn test_explicit_params() {
        let params = CallbackParams {
            site: Some("KSC LC-39A".to_string()),
            low: Some(1000.0),
            high: Some(5000.0),
        };
        let controls = params.into_controls(&dataset());
        assert_eq!(controls.site, SiteSelection::parse("KSC LC-39A"));
        assert_eq!(controls.payload_range, (1000.0, 5000.0));
    }
}
