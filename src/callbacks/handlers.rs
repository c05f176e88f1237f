//! Chart recomputation handlers
//!
//! The two pure functions behind the dashboard's charts. Each is a function
//! of (dataset, current control values) -> figure: no I/O, no locks, no
//! shared mutable state. The HTTP host invokes them through the
//! [`CallbackRegistry`](super::CallbackRegistry) whenever a subscribed input
//! changes.

use crate::charts::{Figure, Trace};
use crate::dataset::{Dataset, LaunchRecord, SiteSelection};

use super::ControlValues;

/// Build the success pie figure
///
/// With the "ALL" sentinel selected: one slice per launch site, sized by
/// that site's count of successful launches; sites with zero successes are
/// omitted. With a specific site selected: one slice per outcome value
/// (labels "0" and "1"), sized by count within that site. An unknown site
/// narrows to nothing and yields a figure with no traces.
pub fn success_pie(dataset: &Dataset, controls: &ControlValues) -> Figure {
    match &controls.site {
        SiteSelection::All => {
            let mut labels = Vec::new();
            let mut values = Vec::new();
            for site in dataset.sites() {
                let successes = dataset
                    .site_records(site)
                    .iter()
                    .filter(|r| r.is_success())
                    .count() as u64;
                if successes > 0 {
                    labels.push(site.clone());
                    values.push(successes);
                }
            }

            let figure = Figure::new("Total Success Launches By Site");
            if labels.is_empty() {
                figure
            } else {
                figure.trace(Trace::pie(labels, values))
            }
        }
        SiteSelection::Site(site) => {
            let subset = dataset.site_records(site);
            let mut labels = Vec::new();
            let mut values = Vec::new();
            for outcome in [0u8, 1u8] {
                let count = subset.iter().filter(|r| r.outcome == outcome).count() as u64;
                if count > 0 {
                    labels.push(outcome.to_string());
                    values.push(count);
                }
            }

            let figure = Figure::new(format!("Total Success Launches for Site {site}"));
            if labels.is_empty() {
                figure
            } else {
                figure.trace(Trace::pie(labels, values))
            }
        }
    }
}

/// Build the payload-outcome scatter figure
///
/// Narrows to records with payload mass strictly inside the selected
/// bounds (records exactly at either bound are dropped), then by site
/// unless "ALL" is selected. One marker trace per booster version category;
/// x = payload mass, y = outcome.
pub fn payload_scatter(dataset: &Dataset, controls: &ControlValues) -> Figure {
    let (low, high) = controls.payload_range;
    let records = dataset.payload_window(low, high, &controls.site);

    let title = match &controls.site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Payload and Booster Versions for site {site}")
        }
    };

    let mut figure = Figure::new(title).axes("Payload Mass (kg)", "class");
    for category in booster_categories(&records) {
        let (x, y): (Vec<f64>, Vec<f64>) = records
            .iter()
            .filter(|r| r.booster_version == category)
            .map(|r| (r.payload_mass, f64::from(r.outcome)))
            .unzip();
        figure = figure.trace(Trace::markers(category, x, y));
    }
    figure
}

/// Distinct booster version categories, in first-appearance order
fn booster_categories(records: &[&LaunchRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for record in records {
        if !categories.iter().any(|c| c == &record.booster_version) {
            categories.push(record.booster_version.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, 1, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 9600.0, 0, "FT"),
            LaunchRecord::new("KSC LC-39A", 2000.0, 1, "FT"),
        ])
        .unwrap()
    }

    fn controls(site: &str, low: f64, high: f64) -> ControlValues {
        ControlValues {
            site: SiteSelection::parse(site),
            payload_range: (low, high),
        }
    }

    fn pie_slices(figure: &Figure) -> (Vec<String>, Vec<u64>) {
        match figure.data.as_slice() {
            [Trace::Pie { labels, values }] => (labels.clone(), values.clone()),
            other => panic!("expected a single pie trace, got {other:?}"),
        }
    }

    #[test]
    fn test_pie_all_sites_one_slice_per_site() {
        let figure = success_pie(&dataset(), &controls("ALL", 0.0, 10000.0));
        let (labels, values) = pie_slices(&figure);

        // One slice per distinct site with successes, sized by success count.
        assert_eq!(labels, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(values, vec![1, 1]);
        assert_eq!(figure.layout.title, "Total Success Launches By Site");
    }

    #[test]
    fn test_pie_all_sites_omits_zero_success_site() {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, 1, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 2000.0, 0, "FT"),
        ])
        .unwrap();

        let figure = success_pie(&dataset, &controls("ALL", 0.0, 10000.0));
        let (labels, values) = pie_slices(&figure);
        assert_eq!(labels, vec!["CCAFS LC-40"]);
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_pie_single_site_outcome_partition() {
        let figure = success_pie(&dataset(), &controls("CCAFS LC-40", 0.0, 10000.0));
        let (labels, values) = pie_slices(&figure);

        // One failure and one success at this site; counts cover the subset.
        assert_eq!(labels, vec!["0", "1"]);
        assert_eq!(values, vec![1, 1]);
        assert_eq!(values.iter().sum::<u64>() as usize, 2);
        assert_eq!(
            figure.layout.title,
            "Total Success Launches for Site CCAFS LC-40"
        );
    }

    #[test]
    fn test_pie_unknown_site_is_empty_not_error() {
        let figure = success_pie(&dataset(), &controls("Boca Chica", 0.0, 10000.0));
        assert!(figure.is_empty());
    }

    #[test]
    fn test_scatter_wide_bounds_include_all_points() {
        let figure = payload_scatter(&dataset(), &controls("ALL", 0.0, 10000.0));

        let total_points: usize = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter { x, .. } => x.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(total_points, 3);
        assert_eq!(figure.layout.title, "Payload vs. Outcome for All Sites");
    }

    #[test]
    fn test_scatter_boundary_records_excluded() {
        // Bounds land exactly on two records; both are dropped.
        let figure = payload_scatter(&dataset(), &controls("ALL", 500.0, 9600.0));

        assert_eq!(figure.data.len(), 1);
        match &figure.data[0] {
            Trace::Scatter { x, y, name, .. } => {
                assert_eq!(x, &vec![2000.0]);
                assert_eq!(y, &vec![1.0]);
                assert_eq!(name.as_deref(), Some("FT"));
            }
            other => panic!("expected scatter trace, got {other:?}"),
        }
    }

    #[test]
    fn test_scatter_one_trace_per_booster_category() {
        let figure = payload_scatter(&dataset(), &controls("ALL", 0.0, 10000.0));

        let names: Vec<_> = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter { name, .. } => name.clone().unwrap(),
                _ => panic!("expected scatter traces"),
            })
            .collect();
        assert_eq!(names, vec!["v1.0", "FT"]);
    }

    #[test]
    fn test_scatter_site_narrowing_and_title() {
        let figure = payload_scatter(&dataset(), &controls("KSC LC-39A", 0.0, 10000.0));

        assert_eq!(
            figure.layout.title,
            "Payload and Booster Versions for site KSC LC-39A"
        );
        let total_points: usize = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter { x, .. } => x.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(total_points, 1);
    }

    #[test]
    fn test_scatter_unknown_site_is_empty() {
        let figure = payload_scatter(&dataset(), &controls("Boca Chica", 0.0, 10000.0));
        assert!(figure.is_empty());
    }
}
