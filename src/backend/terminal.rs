//! Terminal text backend.
//!
//! Renders profiles as a character grid: each column samples every
//! solver's step curve and marks the cell holding its value. Useful for
//! quick looks over SSH and in CI logs.

use super::{Backend, PlotHandle, ProfileBackend, ProfilePlot};
use crate::color::solver_color;
use crate::error::Result;
use crate::ticks::{powertick, tick_text};
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Plain ASCII glyphs (widest compatibility)
    #[default]
    Ascii,
    /// Glyphs colored with ANSI 24-bit escapes
    AnsiTrueColor,
}

/// Backend rendering profiles as terminal text.
#[derive(Debug, Clone)]
pub struct TerminalBackend {
    mode: TerminalMode,
    width: u32,
    height: u32,
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend {
    /// Per-solver markers, cycled for more solvers.
    const GLYPHS: &'static [char] = &['*', '+', 'o', 'x', '#', '@', '%', '&'];

    /// Width of the y tick gutter (`" 0.5 |"`).
    const GUTTER: usize = 6;

    /// Create a 60x16 ASCII backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TerminalMode::default(),
            width: 60,
            height: 16,
        }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Marker glyph of solver `s`.
    #[must_use]
    pub fn glyph(s: usize) -> char {
        Self::GLYPHS[s % Self::GLYPHS.len()]
    }

    fn paint(&self, out: &mut String, cell: Option<usize>) {
        match (cell, self.mode) {
            (None, _) => out.push(' '),
            (Some(s), TerminalMode::Ascii) => out.push(Self::glyph(s)),
            (Some(s), TerminalMode::AnsiTrueColor) => {
                let c = solver_color(s);
                let _ = write!(out, "\x1b[38;2;{};{};{}m{}\x1b[0m", c.r, c.g, c.b, Self::glyph(s));
            }
        }
    }

    fn x_tick(plot: &ProfilePlot<'_>, value: f64) -> String {
        if plot.data.is_log2() {
            powertick(&tick_text(value))
        } else {
            tick_text(value)
        }
    }

    /// Render a plot to text.
    #[must_use]
    pub fn text(&self, plot: &ProfilePlot<'_>) -> String {
        let data = plot.data;
        let cols = self.width.max(2) as usize;
        let rows = self.height.max(2) as usize;

        let x_min = data.origin();
        let x_max = if data.max_value() > x_min {
            data.max_value()
        } else {
            x_min + 1.0
        };

        // Later solvers overwrite earlier ones where curves coincide.
        let mut grid: Vec<Option<usize>> = vec![None; rows * cols];
        for (s, curve) in data.curves().iter().enumerate() {
            for c in 0..cols {
                let x = x_min + (x_max - x_min) * c as f64 / (cols - 1) as f64;
                let y = curve.value_at(x).clamp(0.0, 1.0);
                let r = ((1.0 - y) * (rows - 1) as f64).round() as usize;
                grid[r * cols + c] = Some(s);
            }
        }

        let mut out = String::with_capacity((cols + Self::GUTTER + 1) * (rows + 6));
        if !plot.title.is_empty() {
            let _ = writeln!(out, "{:^width$}", plot.title, width = cols + Self::GUTTER);
        }

        for r in 0..rows {
            let label = if r == 0 {
                "1"
            } else if r == rows - 1 {
                "0"
            } else if 2 * r == rows - 1 {
                "0.5"
            } else {
                ""
            };
            let _ = write!(out, "{label:>4} |");
            for c in 0..cols {
                self.paint(&mut out, grid[r * cols + c]);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "{:>4} +{}", "", "-".repeat(cols));
        let left = Self::x_tick(plot, x_min);
        let right = Self::x_tick(plot, x_max);
        let gap = cols.saturating_sub(left.chars().count() + right.chars().count());
        let _ = writeln!(out, "{:w$}{left}{:gap$}{right}", "", "", w = Self::GUTTER);
        let _ = writeln!(out, "{:w$}{}", "", plot.xlabel, w = Self::GUTTER);
        let _ = writeln!(out, "y: {}", plot.ylabel);

        for (s, label) in plot.labels.iter().enumerate() {
            out.push_str("  ");
            self.paint(&mut out, Some(s));
            let _ = writeln!(out, " {label}");
        }
        out
    }
}

impl ProfileBackend for TerminalBackend {
    fn render(&self, plot: &ProfilePlot<'_>) -> Result<PlotHandle> {
        Ok(PlotHandle::new(Backend::Terminal, self.text(plot)))
    }
}

impl batuta_common::display::WithDimensions for TerminalBackend {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
