//! Page layout definition
//!
//! A declarative description of the dashboard page: title, the site
//! dropdown, the payload range control, and the chart slots with their
//! input subscriptions. Built once at startup from the loaded dataset and
//! served as JSON; the browser shell renders controls from it and uses the
//! per-chart input lists to decide what to refresh on each input change.

use serde::Serialize;

use crate::callbacks::{CallbackRegistry, PAYLOAD_SLIDER, SITE_DROPDOWN};
use crate::dataset::{Dataset, SiteSelection};

/// Slider bounds and step, fixed by the page design
const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 10000.0;
const SLIDER_STEP: f64 = 1000.0;
/// Tick labels are denser than the step
const SLIDER_MARK_SPACING: f64 = 500.0;

/// The whole page, ready to serialize
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub title: String,
    pub dropdown: Dropdown,
    pub slider: RangeSlider,
    pub charts: Vec<ChartSlot>,
}

/// The site selector
#[derive(Debug, Clone, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub placeholder: String,
    pub options: Vec<DropdownOption>,
}

/// One dropdown entry
#[derive(Debug, Clone, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// The dual-handle payload range control
#[derive(Debug, Clone, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    /// Initial [low, high], seeded from the dataset's observed extremes
    pub value: [f64; 2],
}

/// One chart region and the input controls it subscribes to
#[derive(Debug, Clone, Serialize)]
pub struct ChartSlot {
    pub id: String,
    pub inputs: Vec<String>,
}

impl PageLayout {
    /// Build the layout for a dataset and registry
    ///
    /// Dropdown options are the sentinel plus each distinct site observed in
    /// the dataset; the slider's initial value is the observed payload
    /// min/max.
    pub fn build(dataset: &Dataset, registry: &CallbackRegistry) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: SiteSelection::ALL_TOKEN.to_string(),
        }];
        for site in dataset.sites() {
            options.push(DropdownOption {
                label: site.clone(),
                value: site.clone(),
            });
        }

        let mut marks = Vec::new();
        let mut mark = SLIDER_MIN;
        while mark <= SLIDER_MAX {
            marks.push(mark);
            mark += SLIDER_MARK_SPACING;
        }

        let mut charts: Vec<ChartSlot> = registry
            .outputs()
            .into_iter()
            .map(|output| ChartSlot {
                id: output.to_string(),
                inputs: registry
                    .inputs_of(output)
                    .unwrap_or(&[])
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            })
            .collect();
        // HashMap iteration order is arbitrary; keep the page stable.
        charts.sort_by(|a, b| a.inputs.len().cmp(&b.inputs.len()).then(a.id.cmp(&b.id)));

        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            dropdown: Dropdown {
                id: SITE_DROPDOWN.to_string(),
                placeholder: "Select a launch site".to_string(),
                options,
            },
            slider: RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                label: "Payload range (Kg):".to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: [dataset.payload_min(), dataset.payload_max()],
            },
            charts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::{PAYLOAD_SCATTER_CHART, SUCCESS_PIE_CHART};
    use crate::dataset::LaunchRecord;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 525.0, 1, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, 0, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn test_dropdown_options() {
        let layout = PageLayout::build(&dataset(), &CallbackRegistry::with_defaults());

        let values: Vec<_> = layout
            .dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(layout.dropdown.options[0].label, "All Sites");
    }

    #[test]
    fn test_slider_seeded_from_dataset() {
        let layout = PageLayout::build(&dataset(), &CallbackRegistry::with_defaults());

        assert_eq!(layout.slider.min, 0.0);
        assert_eq!(layout.slider.max, 10000.0);
        assert_eq!(layout.slider.step, 1000.0);
        assert_eq!(layout.slider.value, [525.0, 9600.0]);
        assert_eq!(layout.slider.marks.len(), 21);
        assert_eq!(layout.slider.marks.first(), Some(&0.0));
        assert_eq!(layout.slider.marks.last(), Some(&10000.0));
    }

    #[test]
    fn test_chart_slots_carry_input_wiring() {
        let layout = PageLayout::build(&dataset(), &CallbackRegistry::with_defaults());

        assert_eq!(layout.charts.len(), 2);
        assert_eq!(layout.charts[0].id, SUCCESS_PIE_CHART);
        assert_eq!(layout.charts[0].inputs, vec!["site-dropdown"]);
        assert_eq!(layout.charts[1].id, PAYLOAD_SCATTER_CHART);
        assert_eq!(
            layout.charts[1].inputs,
            vec!["site-dropdown", "payload-slider"]
        );
    }
}
