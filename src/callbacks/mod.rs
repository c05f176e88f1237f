//! Reactive callback registry
//!
//! The framework-decorator wiring of a reactive dashboard, re-expressed as
//! explicit function registration: each chart output slot maps to the list
//! of input slots it subscribes to and a pure handler function. The HTTP
//! host looks up the slot and invokes the handler with the shared dataset
//! and the browser's current control values.

pub mod handlers;

use std::collections::HashMap;

use crate::charts::Figure;
use crate::dataset::{Dataset, SiteSelection};

pub use handlers::{payload_scatter, success_pie};

/// Input slot id of the site dropdown
pub const SITE_DROPDOWN: &str = "site-dropdown";
/// Input slot id of the payload range control
pub const PAYLOAD_SLIDER: &str = "payload-slider";
/// Output slot id of the success pie chart
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
/// Output slot id of the payload-outcome scatter chart
pub const PAYLOAD_SCATTER_CHART: &str = "payload-scatter-chart";

/// Current values of the page's input controls
///
/// Owned and mutated by the browser; handlers receive it read-only per
/// invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValues {
    /// Dropdown value: a site or the "ALL" sentinel
    pub site: SiteSelection,
    /// Range control value: [low, high] payload bounds
    pub payload_range: (f64, f64),
}

impl ControlValues {
    /// Initial control values for a dataset: no site filter, range seeded
    /// with the observed payload extremes
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: (dataset.payload_min(), dataset.payload_max()),
        }
    }
}

/// Handler signature: pure function of (dataset, controls) -> figure
pub type HandlerFn = fn(&Dataset, &ControlValues) -> Figure;

/// One registered output slot
struct Callback {
    inputs: &'static [&'static str],
    handler: HandlerFn,
}

/// Maps output slot ids to their input subscriptions and handlers
pub struct CallbackRegistry {
    slots: HashMap<&'static str, Callback>,
}

impl CallbackRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Registry with the dashboard's two charts wired up
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SUCCESS_PIE_CHART, &[SITE_DROPDOWN], success_pie);
        registry.register(
            PAYLOAD_SCATTER_CHART,
            &[SITE_DROPDOWN, PAYLOAD_SLIDER],
            payload_scatter,
        );
        registry
    }

    /// Register a handler for an output slot
    pub fn register(
        &mut self,
        output: &'static str,
        inputs: &'static [&'static str],
        handler: HandlerFn,
    ) {
        self.slots.insert(output, Callback { inputs, handler });
    }

    /// Invoke the handler for an output slot; `None` for an unknown slot
    pub fn invoke(
        &self,
        output: &str,
        dataset: &Dataset,
        controls: &ControlValues,
    ) -> Option<Figure> {
        self.slots
            .get(output)
            .map(|cb| (cb.handler)(dataset, controls))
    }

    /// Input slots an output subscribes to; `None` for an unknown slot
    pub fn inputs_of(&self, output: &str) -> Option<&'static [&'static str]> {
        self.slots.get(output).map(|cb| cb.inputs)
    }

    /// Registered output slot ids
    pub fn outputs(&self) -> Vec<&'static str> {
        self.slots.keys().copied().collect()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
