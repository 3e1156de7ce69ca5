use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Vertical alignment of a text label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    #[default]
    Auto,
    Middle,
}

/// One abstract drawable primitive at computed pixel coordinates.
///
/// The core computes all geometry — binding these to an actual rendering
/// surface (SVG markup, canvas, anything) is the collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        /// Hover label, e.g. the project path with the campus prefix stripped
        tooltip: Option<String>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        fill: String,
        anchor: TextAnchor,
        baseline: TextBaseline,
    },
}

/// A fully laid-out chart: a logical canvas size plus the primitives to
/// draw inside it, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Chart {
    /// An empty canvas of the given size — the defined fallback for
    /// datasets with nothing to draw.
    #[must_use]
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }
}

/// One axis tick: a pixel position along its axis plus an optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub at: f64,
    pub label: Option<String>,
}

/// Grid layout for the line chart, derived purely from the time span and
/// the maximum cumulative value. Recomputed on every render — it carries
/// no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Horizontal grid lines: y position + "N kB" label
    pub value_ticks: Vec<Tick>,

    /// Vertical grid lines: x position + day / "Mon YY" label
    /// (the rightmost boundary line carries no label)
    pub time_ticks: Vec<Tick>,
}
