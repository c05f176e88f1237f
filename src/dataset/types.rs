//! Core data types for the launch-records dataset
//!
//! This module defines the fundamental types the dashboard computes over:
//! - `LaunchRecord`: a single launch event
//! - `Dataset`: the immutable record collection loaded once at startup
//! - `SiteSelection`: the dropdown's value, including the "ALL" sentinel

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// A single launch event
///
/// One row of the input CSV. Immutable after load; the full collection is
/// loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. "CCAFS LC-40"
    pub site: String,
    /// Payload mass in kilograms
    pub payload_mass: f64,
    /// Launch outcome: 1 = success, 0 = failure
    pub outcome: u8,
    /// Booster version category, e.g. "FT" or "v1.0"
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass: f64,
        outcome: u8,
        booster_version: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass,
            outcome,
            booster_version: booster_version.into(),
        }
    }

    /// Whether this launch succeeded
    pub fn is_success(&self) -> bool {
        self.outcome == 1
    }
}

/// The dropdown's current value: a specific site or the "ALL" sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// No site filter ("All Sites")
    All,
    /// Narrow to one launch site
    Site(String),
}

impl SiteSelection {
    /// Wire token for the no-filter sentinel
    pub const ALL_TOKEN: &'static str = "ALL";

    /// Parse a wire value from the dropdown
    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL_TOKEN {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw.to_string())
        }
    }

    /// Whether a record at `site` passes this selection
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }

    /// The selected site name, if any
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(s) => Some(s),
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", Self::ALL_TOKEN),
            SiteSelection::Site(s) => write!(f, "{}", s),
        }
    }
}

/// The immutable launch-record collection plus payload-mass extremes
///
/// Built once at startup and shared read-only behind an `Arc` for the process
/// lifetime. Handlers narrow it into fresh derived collections; they never
/// mutate it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl Dataset {
    /// Build a dataset from loaded records
    ///
    /// Computes the distinct site list (first-appearance order) and the
    /// observed payload min/max used to seed the range control. An empty
    /// record set is a load error: there is nothing to seed the slider with.
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;

        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
            payload_min = payload_min.min(record.payload_mass);
            payload_max = payload_max.max(record.payload_mass);
        }

        Ok(Self {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    /// All records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, in first-appearance order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Smallest observed payload mass
    pub fn payload_min(&self) -> f64 {
        self.payload_min
    }

    /// Largest observed payload mass
    pub fn payload_max(&self) -> f64 {
        self.payload_max
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records at one site, in file order
    pub fn site_records(&self, site: &str) -> Vec<&LaunchRecord> {
        self.records.iter().filter(|r| r.site == site).collect()
    }

    /// Records inside an exclusive payload window, optionally narrowed by site
    ///
    /// Bounds are strict on both ends: a record whose payload mass equals
    /// `low` or `high` is excluded. This mirrors the upstream filter exactly.
    pub fn payload_window(
        &self,
        low: f64,
        high: f64,
        selection: &SiteSelection,
    ) -> Vec<&LaunchRecord> {
        self.records
            .iter()
            .filter(|r| r.payload_mass > low && r.payload_mass < high)
            .filter(|r| selection.matches(&r.site))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, 1, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 9600.0, 0, "FT"),
            LaunchRecord::new("KSC LC-39A", 2000.0, 1, "FT"),
        ]
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
    }

    #[test]
    fn test_selection_matches() {
        assert!(SiteSelection::All.matches("VAFB SLC-4E"));
        let sel = SiteSelection::parse("CCAFS LC-40");
        assert!(sel.matches("CCAFS LC-40"));
        assert!(!sel.matches("KSC LC-39A"));
    }

    #[test]
    fn test_dataset_extremes_and_sites() {
        let dataset = Dataset::new(sample_records()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.payload_min(), 500.0);
        assert_eq!(dataset.payload_max(), 9600.0);
        assert_eq!(dataset.sites(), &["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = Dataset::new(Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_site_records_partition() {
        let dataset = Dataset::new(sample_records()).unwrap();
        let subset = dataset.site_records("CCAFS LC-40");
        assert_eq!(subset.len(), 2);

        let successes = subset.iter().filter(|r| r.is_success()).count();
        let failures = subset.iter().filter(|r| !r.is_success()).count();
        assert_eq!(successes + failures, subset.len());
    }

    #[test]
    fn test_payload_window_bounds_exclusive() {
        let dataset = Dataset::new(sample_records()).unwrap();

        // Both boundary records survive a window that does not touch them.
        let wide = dataset.payload_window(0.0, 10000.0, &SiteSelection::All);
        assert_eq!(wide.len(), 3);

        // Records exactly at the bounds are dropped.
        let narrow = dataset.payload_window(500.0, 9600.0, &SiteSelection::All);
        assert_eq!(narrow.len(), 1);
        assert_eq!(narrow[0].site, "KSC LC-39A");
    }

    #[test]
    fn test_payload_window_site_narrowing() {
        let dataset = Dataset::new(sample_records()).unwrap();
        let sel = SiteSelection::parse("CCAFS LC-40");
        let subset = dataset.payload_window(0.0, 10000.0, &sel);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.site == "CCAFS LC-40"));
    }
}
