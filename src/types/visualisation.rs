//! Plotly chart types for timeline visualisation
//!
//! Serialises to the `{data: [...], layout: {...}}` shape expected by
//! Plotly.js.

use super::events::MarkerKind;
use serde::Serialize;

/// Complete Plotly chart data structure
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyChart {
    pub data: Vec<PlotlyTrace>,
    pub layout: PlotlyLayout,
}

/// A single data series in the chart
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub name: String,
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<PlotlyMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Plotly marker configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyMarker {
    pub color: String,
}

/// Plotly layout configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyLayout {
    pub title: PlotlyTitle,
    pub xaxis: PlotlyAxis,
    pub yaxis: PlotlyAxis,
    pub hovermode: String,
    pub hoverlabel: PlotlyHoverLabel,
    /// Bar mode: "stack", "group", "overlay", "relative"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<PlotlyLegend>,
}

/// Plotly title configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyTitle {
    pub text: String,
}

/// Plotly axis configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyAxis {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<String>,
}

/// Plotly hover label configuration
#[derive(Debug, Clone, Serialize)]
pub struct PlotlyHoverLabel {
    /// -1 means show full name without truncation
    pub namelength: i32,
}

/// Plotly legend configuration
#[derive(Debug, Clone, Serialize, Default)]
pub struct PlotlyLegend {
    /// Legend orientation: "v" (vertical) or "h" (horizontal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
}

impl PlotlyLayout {
    /// Create a basic layout with single y-axis
    pub fn basic(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: PlotlyTitle {
                text: title.to_string(),
            },
            xaxis: PlotlyAxis {
                title: x_title.to_string(),
                axis_type: None,
            },
            yaxis: PlotlyAxis {
                title: y_title.to_string(),
                axis_type: None,
            },
            hovermode: "x unified".to_string(),
            hoverlabel: PlotlyHoverLabel { namelength: -1 },
            barmode: None,
            legend: None,
        }
    }

    /// Standard positioning: `with_legend("v", 1.02, 1.0, "left")` for vertical legend on right
    pub fn with_legend(mut self, orientation: &str, x: f64, y: f64, xanchor: &str) -> Self {
        self.legend = Some(PlotlyLegend {
            orientation: Some(orientation.to_string()),
            x: Some(x),
            y: Some(y),
            xanchor: Some(xanchor.to_string()),
        });
        self
    }
}

impl PlotlyTrace {
    /// Create a bar trace
    pub fn bar(x: Vec<String>, y: Vec<f64>, name: &str, color: &str) -> Self {
        Self {
            x,
            y,
            name: name.to_string(),
            trace_type: "bar".to_string(),
            marker: Some(PlotlyMarker {
                color: color.to_string(),
            }),
            text: None,
            hovertemplate: None,
        }
    }

    /// Attach per-point hover text
    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self.hovertemplate = Some("%{text}<extra>%{fullData.name}</extra>".to_string());
        self
    }
}

/// Get colour for a marker kind
pub fn get_marker_colour(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::Release => "#3498DB",
        MarkerKind::Flag => "#E67E22",
    }
}
