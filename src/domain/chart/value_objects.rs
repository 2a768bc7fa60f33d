use serde::Serialize;

/// Value Object - 2-D position in SVG user units (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
}

/// Value Object - outer frame of a cartesian chart and its plot padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self { width: 640.0, height: 220.0, padding: Padding::new(16.0, 16.0, 28.0, 44.0) }
    }
}

impl ChartFrame {
    pub fn new(width: f64, height: f64, padding: Padding) -> Self {
        Self { width, height, padding }
    }

    /// Width of the plot area between left and right padding.
    pub fn chart_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn chart_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    /// y of the value-zero line.
    pub fn baseline(&self) -> f64 {
        self.padding.top + self.chart_height()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutStyle {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
}

impl Default for DonutStyle {
    fn default() -> Self {
        Self { center: Point::new(70.0, 70.0), radius: 54.0, stroke_width: 16.0 }
    }
}

impl DonutStyle {
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }
}

/// Fixed frame every table-row sparkline is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparklineFrame {
    pub width: f64,
    pub height: f64,
    pub pad: f64,
    /// Horizontal room kept free on the right for the last-sample marker.
    pub end_padding: f64,
    pub end_margin: f64,
}

impl Default for SparklineFrame {
    fn default() -> Self {
        Self { width: 120.0, height: 32.0, pad: 3.0, end_padding: 6.0, end_margin: 2.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramFrame {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}

impl Default for HistogramFrame {
    fn default() -> Self {
        Self { width: 240.0, height: 64.0, gap: 4.0 }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {:.2})", self.a.max(0.0))
        }
    }
}

/// Design tokens shared by every chart kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub accent: Color,
    pub accent_mid: Color,
    pub danger: Color,
    pub ok: Color,
    pub warn: Color,
    pub bad: Color,
    pub grid: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::from_hex(0x6366f1),
            accent_mid: Color::from_hex(0xa5b4fc),
            danger: Color::from_hex(0xef4444),
            ok: Color::from_hex(0x22c55e),
            warn: Color::from_hex(0xf59e0b),
            bad: Color::from_hex(0xef4444),
            grid: Color::from_hex(0xe5e7eb),
            muted: Color::from_hex(0x9ca3af),
        }
    }
}

impl Palette {
    /// Map a color token to CSS. Unknown tokens are taken as raw CSS colors.
    pub fn resolve(&self, token: &str) -> String {
        let color = match token {
            "accent" => self.accent,
            "accentMid" => self.accent_mid,
            "danger" => self.danger,
            "ok" | "success" => self.ok,
            "warn" | "warning" => self.warn,
            "bad" | "error" => self.bad,
            "grid" => self.grid,
            "muted" => self.muted,
            other => return other.to_string(),
        };
        color.to_css()
    }
}

/// Explicitly passed rendering configuration; the geometry functions read no globals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub traffic: ChartFrame,
    pub donut: DonutStyle,
    pub sparkline: SparklineFrame,
    pub histogram: HistogramFrame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_survive_css_formatting() {
        assert_eq!(Color::from_hex(0x6366f1).to_css(), "#6366f1");
        assert_eq!(Color::from_hex(0x000000).with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.50)");
    }

    #[test]
    fn palette_passes_raw_colors_through() {
        let palette = Palette::default();
        assert_eq!(palette.resolve("danger"), "#ef4444");
        assert_eq!(palette.resolve("#123456"), "#123456");
    }

    #[test]
    fn frame_plot_area() {
        let frame = ChartFrame::new(600.0, 200.0, Padding::new(20.0, 20.0, 30.0, 40.0));
        assert_eq!(frame.chart_width(), 540.0);
        assert_eq!(frame.chart_height(), 150.0);
        assert_eq!(frame.baseline(), 170.0);
    }
}
