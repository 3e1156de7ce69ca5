//! Thin adapter binding the abstract primitive list to SVG markup.
//!
//! The layout layer knows nothing about SVG; this module is the only place
//! element names and attribute syntax appear.

use crate::models::chart::{Chart, Primitive, TextAnchor, TextBaseline};

/// Serialize a laid-out chart as a standalone `<svg>` element.
///
/// The element scales to its container (`width`/`height` 100%) while the
/// `viewBox` pins the logical coordinate system the layout was computed in.
#[must_use]
pub fn to_markup(chart: &Chart) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        chart.width, chart.height,
    ));

    for primitive in &chart.primitives {
        match primitive {
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                out.push_str(&format!(
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                    escape(stroke),
                ));
            }
            Primitive::Circle {
                cx,
                cy,
                r,
                fill,
                tooltip,
            } => match tooltip {
                Some(title) => out.push_str(&format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"><title>{}</title></circle>"#,
                    escape(fill),
                    escape(title),
                )),
                None => out.push_str(&format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#,
                    escape(fill),
                )),
            },
            Primitive::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                out.push_str(&format!(
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}"/>"#,
                    escape(fill),
                ));
            }
            Primitive::Text {
                x,
                y,
                content,
                font_size,
                fill,
                anchor,
                baseline,
            } => {
                out.push_str(&format!(
                    r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}""#,
                    escape(fill),
                ));
                match anchor {
                    TextAnchor::Start => {}
                    TextAnchor::Middle => out.push_str(r#" text-anchor="middle""#),
                    TextAnchor::End => out.push_str(r#" text-anchor="end""#),
                }
                if *baseline == TextBaseline::Middle {
                    out.push_str(r#" dominant-baseline="middle""#);
                }
                out.push('>');
                out.push_str(&escape(content));
                out.push_str("</text>");
            }
        }
    }

    out.push_str("</svg>");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
