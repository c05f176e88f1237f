//! Plotly figure specifications
//!
//! Chart output is an opaque value: a `Figure` serializes to the JSON shape
//! Plotly.js expects (`data` traces plus `layout`), and the browser renders
//! it with `Plotly.react`. The application builds figures; it never
//! interprets them.

use serde::Serialize;

/// A renderable chart: traces plus layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    /// Create a figure with a title and no traces
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: FigureLayout {
                title: title.into(),
                xaxis: None,
                yaxis: None,
            },
        }
    }

    /// Builder method: set axis titles
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.layout.xaxis = Some(Axis { title: x.into() });
        self.layout.yaxis = Some(Axis { title: y.into() });
        self
    }

    /// Builder method: append a trace
    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    /// Whether the figure has no traces at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// One Plotly trace
///
/// Serializes with a `type` tag, matching the Plotly.js trace schema.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Proportion chart: one slice per label, sized by the paired value
    Pie { labels: Vec<String>, values: Vec<u64> },
    /// Point cloud: one marker per (x, y) pair
    Scatter {
        x: Vec<f64>,
        y: Vec<f64>,
        mode: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl Trace {
    /// A pie trace from parallel label/value slices
    pub fn pie(labels: Vec<String>, values: Vec<u64>) -> Self {
        Trace::Pie { labels, values }
    }

    /// A named marker-mode scatter trace
    pub fn markers(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Trace::Scatter {
            x,
            y,
            mode: "markers".to_string(),
            name: Some(name.into()),
        }
    }
}

/// Figure layout: title and optional axis titles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureLayout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

/// Axis configuration
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: String,
}
