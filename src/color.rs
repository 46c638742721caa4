//! Colors for solver curves.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Light grey for grid lines.
    pub const GRID: Self = Self::new(220, 220, 220, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS color string (`rgb(…)` when opaque, `rgba(…)` otherwise).
    #[must_use]
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                f32::from(self.a) / 255.0
            )
        }
    }
}

/// Categorical palette (Tableau 10) used to tell solvers apart.
pub const SOLVER_PALETTE: [Rgba; 10] = [
    Rgba::rgb(31, 119, 180),
    Rgba::rgb(255, 127, 14),
    Rgba::rgb(44, 160, 44),
    Rgba::rgb(214, 39, 40),
    Rgba::rgb(148, 103, 189),
    Rgba::rgb(140, 86, 75),
    Rgba::rgb(227, 119, 194),
    Rgba::rgb(127, 127, 127),
    Rgba::rgb(188, 189, 34),
    Rgba::rgb(23, 190, 207),
];

/// Color of solver `s`, cycling through [`SOLVER_PALETTE`].
#[must_use]
pub fn solver_color(s: usize) -> Rgba {
    SOLVER_PALETTE[s % SOLVER_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).to_css(), "rgb(1,2,3)");
    }

    #[test]
    fn test_css_translucent() {
        assert_eq!(Rgba::new(0, 0, 0, 0).to_css(), "rgba(0,0,0,0.000)");
    }

    #[test]
    fn test_solver_color_cycles() {
        assert_eq!(solver_color(0), solver_color(10));
        assert_ne!(solver_color(0), solver_color(1));
    }
}
