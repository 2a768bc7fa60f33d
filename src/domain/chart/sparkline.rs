use serde::Serialize;

use super::path::SvgPath;
use super::value_objects::{Palette, Point, SparklineFrame};
use crate::domain::telemetry::HealthLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparklineGeometry {
    pub width: f64,
    pub height: f64,
    /// Faint fill under the line.
    pub area_path: String,
    pub line_path: String,
    /// Dot on the most recent sample.
    pub marker: Option<Point>,
    pub color: String,
}

impl SparklineGeometry {
    pub fn is_empty(&self) -> bool {
        self.line_path.is_empty()
    }
}

impl Palette {
    pub fn level_color(&self, level: HealthLevel) -> String {
        match level {
            HealthLevel::Ok => self.ok,
            HealthLevel::Warn => self.warn,
            HealthLevel::Bad => self.bad,
        }
        .to_css()
    }
}

/// Plot caller-normalized samples into the fixed sparkline frame.
///
/// Values are trusted to lie in [0, 1]; anything outside is drawn outside the
/// frame rather than clamped. The color depends only on `level`.
pub fn compute_sparkline_path(
    values: &[f64],
    level: HealthLevel,
    frame: &SparklineFrame,
    palette: &Palette,
) -> SparklineGeometry {
    let color = palette.level_color(level);
    if values.len() < 2 {
        return SparklineGeometry {
            width: frame.width,
            height: frame.height,
            area_path: String::new(),
            line_path: String::new(),
            marker: None,
            color,
        };
    }

    let step = (frame.width - frame.end_padding) / (values.len() - 1) as f64;
    let span = frame.height - frame.pad * 2.0 - frame.end_margin;
    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, value)| Point::new(i as f64 * step, frame.pad + (1.0 - value) * span))
        .collect();

    SparklineGeometry {
        width: frame.width,
        height: frame.height,
        area_path: SvgPath::area(&points, frame.height).into_string(),
        line_path: SvgPath::polyline(&points).into_string(),
        marker: points.last().copied(),
        color,
    }
}
