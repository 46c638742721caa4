//! SVG document backend.
//!
//! Draws each solver's profile as a post-step polyline over a framed,
//! gridded plot area, with a legend on the right. `log2` performance
//! profiles get power-of-two tick labels.
//!
//! Recognized extras: `background` (CSS color, `none` for transparent) and
//! `stroke_width`.

use super::{Backend, PlotHandle, ProfileBackend, ProfilePlot};
use crate::color::{solver_color, Rgba};
use crate::error::Result;
use crate::scale::{nice_ticks, LinearScale, Scale};
use crate::ticks::{powertick, tick_text};
use std::fmt::Write as FmtWrite;

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position.
    #[default]
    Start,
    /// Center text at position.
    Middle,
    /// Align text end at position.
    End,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
    },
    /// Line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        stroke_width: f64,
    },
    /// Polyline (connected line segments)
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Rgba,
        stroke_width: f64,
        dash_array: Option<&'static str>,
    },
    /// Text, optionally rotated around its anchor point
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        anchor: TextAnchor,
        rotate: Option<f64>,
    },
}

/// SVG document builder.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    background: Option<String>,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Create an empty document with a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE.to_css()),
            elements: Vec::new(),
        }
    }

    /// Set the background (CSS color) or `None` for transparent.
    #[must_use]
    pub fn background(mut self, background: Option<String>) -> Self {
        self.background = background;
        self
    }

    /// Append an element.
    pub fn push(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render to SVG markup.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = &self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                escape(bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn css_or_none(color: Option<Rgba>) -> String {
    color.map_or_else(|| "none".to_string(), Rgba::to_css)
}

fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" fill="{}" stroke="{}"/>"#,
            css_or_none(*fill),
            css_or_none(*stroke)
        ),
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => format!(
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
            stroke.to_css()
        ),
        SvgElement::Polyline {
            points,
            stroke,
            stroke_width,
            dash_array,
        } => {
            let points_str: String = points
                .iter()
                .map(|(x, y)| format!("{x:.2},{y:.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            let dash_attr = dash_array
                .map(|d| format!(r#" stroke-dasharray="{d}""#))
                .unwrap_or_default();
            format!(
                r#"<polyline points="{points_str}" fill="none" stroke="{}" stroke-width="{stroke_width}"{dash_attr}/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            anchor,
            rotate,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let rotate_attr = rotate
                .map(|deg| format!(r#" transform="rotate({deg} {x:.2} {y:.2})""#))
                .unwrap_or_default();
            format!(
                r#"<text x="{x:.2}" y="{y:.2}" font-size="{font_size}" text-anchor="{anchor_str}" font-family="sans-serif"{rotate_attr}>{}</text>"#,
                escape(text)
            )
        }
    }
}

/// Backend rendering profiles as SVG documents.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    width: u32,
    height: u32,
    font_size: f64,
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgBackend {
    const MARGIN_LEFT: f64 = 70.0;
    const MARGIN_RIGHT: f64 = 160.0;
    const MARGIN_TOP: f64 = 40.0;
    const MARGIN_BOTTOM: f64 = 60.0;

    /// Create a backend producing 800x500 documents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 500,
            font_size: 12.0,
        }
    }

    /// Set the base font size.
    #[must_use]
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Build the document for a plot.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is too small for the plot area.
    pub fn document(&self, plot: &ProfilePlot<'_>) -> Result<SvgDocument> {
        let data = plot.data;
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let left = Self::MARGIN_LEFT;
        let right = (w - Self::MARGIN_RIGHT).max(left + 1.0);
        let top = Self::MARGIN_TOP;
        let bottom = (h - Self::MARGIN_BOTTOM).max(top + 1.0);

        // Leave room right of the last breakpoint so final plateaus are visible.
        let span = data.max_value() - data.origin();
        let x_max = if span > 0.0 {
            data.max_value() + 0.05 * span
        } else {
            data.origin() + 1.0
        };
        let x_scale = LinearScale::padded(data.origin(), x_max, (left, right))?;
        let y_scale = LinearScale::new((0.0, 1.0), (bottom, top))?;

        let background = match plot.extra("background") {
            Some("none") => None,
            Some(color) => Some(color.to_string()),
            None => Some(Rgba::WHITE.to_css()),
        };
        let stroke_width = plot
            .extra("stroke_width")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(2.0);

        let mut doc = SvgDocument::new(self.width, self.height).background(background);

        // Grid and ticks
        for ty in nice_ticks(0.0, 1.0, 5) {
            let py = y_scale.scale(ty);
            doc.push(SvgElement::Line {
                x1: left,
                y1: py,
                x2: right,
                y2: py,
                stroke: Rgba::GRID,
                stroke_width: 1.0,
            });
            doc.push(SvgElement::Text {
                x: left - 6.0,
                y: py + self.font_size / 3.0,
                text: tick_text(ty),
                font_size: self.font_size,
                anchor: TextAnchor::End,
                rotate: None,
            });
        }
        let (x_lo, x_hi) = x_scale.domain();
        for tx in nice_ticks(x_lo, x_hi, 6) {
            let px = x_scale.scale(tx);
            doc.push(SvgElement::Line {
                x1: px,
                y1: top,
                x2: px,
                y2: bottom,
                stroke: Rgba::GRID,
                stroke_width: 1.0,
            });
            let label = if data.is_log2() {
                powertick(&tick_text(tx))
            } else {
                tick_text(tx)
            };
            doc.push(SvgElement::Text {
                x: px,
                y: bottom + self.font_size + 4.0,
                text: label,
                font_size: self.font_size,
                anchor: TextAnchor::Middle,
                rotate: None,
            });
        }

        doc.push(SvgElement::Rect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
            fill: None,
            stroke: Some(Rgba::BLACK),
        });

        // Curves
        for (s, curve) in data.curves().iter().enumerate() {
            let mut points: Vec<(f64, f64)> = curve
                .step_points()
                .into_iter()
                .map(|(x, y)| (x_scale.scale(x), y_scale.scale(y)))
                .collect();
            points.push((right, y_scale.scale(curve.final_fraction())));
            doc.push(SvgElement::Polyline {
                points,
                stroke: solver_color(s),
                stroke_width,
                dash_array: plot.options.linestyle(s).dash_array(),
            });
        }

        // Legend
        for (s, label) in plot.labels.iter().enumerate() {
            let ly = top + 10.0 + s as f64 * (self.font_size + 8.0);
            doc.push(SvgElement::Polyline {
                points: vec![(right + 12.0, ly), (right + 36.0, ly)],
                stroke: solver_color(s),
                stroke_width,
                dash_array: plot.options.linestyle(s).dash_array(),
            });
            doc.push(SvgElement::Text {
                x: right + 42.0,
                y: ly + self.font_size / 3.0,
                text: label.clone(),
                font_size: self.font_size,
                anchor: TextAnchor::Start,
                rotate: None,
            });
        }

        // Titles
        if !plot.title.is_empty() {
            doc.push(SvgElement::Text {
                x: (left + right) / 2.0,
                y: top / 2.0 + self.font_size / 2.0,
                text: plot.title.to_string(),
                font_size: self.font_size * 1.4,
                anchor: TextAnchor::Middle,
                rotate: None,
            });
        }
        doc.push(SvgElement::Text {
            x: (left + right) / 2.0,
            y: h - Self::MARGIN_BOTTOM / 3.0,
            text: plot.xlabel.to_string(),
            font_size: self.font_size,
            anchor: TextAnchor::Middle,
            rotate: None,
        });
        doc.push(SvgElement::Text {
            x: left / 3.0,
            y: (top + bottom) / 2.0,
            text: plot.ylabel.to_string(),
            font_size: self.font_size,
            anchor: TextAnchor::Middle,
            rotate: Some(-90.0),
        });

        Ok(doc)
    }
}

impl ProfileBackend for SvgBackend {
    fn render(&self, plot: &ProfilePlot<'_>) -> Result<PlotHandle> {
        Ok(PlotHandle::new(Backend::Svg, self.document(plot)?.render()))
    }
}

impl batuta_common::display::WithDimensions for SvgBackend {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
