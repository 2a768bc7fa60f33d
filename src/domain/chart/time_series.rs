use serde::Serialize;

use super::format::format_axis_value;
use super::path::SvgPath;
use super::value_objects::{ChartFrame, Point};
use crate::domain::telemetry::SeriesPoint;

/// Vertical headroom above the tallest sample.
pub const HEADROOM: f64 = 1.1;
/// Value fractions at which horizontal gridlines are drawn.
pub const GRIDLINE_FRACTIONS: [f64; 4] = [0.0, 0.33, 0.67, 1.0];
/// Roughly how many x-axis labels to aim for.
pub const TARGET_X_LABELS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub index: usize,
    pub x: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gridline {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesGeometry {
    pub width: f64,
    pub height: f64,
    pub max_value: f64,
    /// Closed outline under the primary series.
    pub area_path: String,
    pub primary_path: String,
    /// Drawn dashed by convention.
    pub secondary_path: String,
    pub primary_points: Vec<Point>,
    pub secondary_points: Vec<Point>,
    pub x_labels: Vec<AxisLabel>,
    pub gridlines: Vec<Gridline>,
}

/// Result of [`compute_time_series_path`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimeSeriesPath {
    /// Fewer than two samples: the caller draws a blank frame of this size.
    Empty { width: f64, height: f64 },
    Plotted(TimeSeriesGeometry),
}

impl TimeSeriesPath {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn geometry(&self) -> Option<&TimeSeriesGeometry> {
        match self {
            Self::Plotted(geometry) => Some(geometry),
            Self::Empty { .. } => None,
        }
    }
}

/// Scale ceiling for a series: largest of either value plus headroom, never below 1.
pub fn series_max_value(series: &[SeriesPoint]) -> f64 {
    let raw = series.iter().fold(0.0_f64, |acc, p| acc.max(p.primary).max(p.secondary));
    (raw * HEADROOM).max(1.0)
}

/// Label stride for `n` samples; the first and last index are always labeled as well.
pub fn label_stride(n: usize) -> usize {
    (n / TARGET_X_LABELS).max(1)
}

/// Map a two-valued series onto an area + line chart inside `frame`.
pub fn compute_time_series_path(series: &[SeriesPoint], frame: &ChartFrame) -> TimeSeriesPath {
    let n = series.len();
    if n < 2 {
        return TimeSeriesPath::Empty { width: frame.width, height: frame.height };
    }

    let max_value = series_max_value(series);
    let chart_width = frame.chart_width();
    let chart_height = frame.chart_height();
    let last = (n - 1) as f64;

    let x_at = |i: usize| frame.padding.left + (i as f64 / last) * chart_width;
    let y_at = |value: f64| frame.padding.top + (1.0 - value / max_value) * chart_height;

    let primary_points: Vec<Point> =
        series.iter().enumerate().map(|(i, p)| Point::new(x_at(i), y_at(p.primary))).collect();
    let secondary_points: Vec<Point> =
        series.iter().enumerate().map(|(i, p)| Point::new(x_at(i), y_at(p.secondary))).collect();

    let stride = label_stride(n);
    let x_labels = series
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0 || *i == n - 1)
        .map(|(index, p)| AxisLabel { index, x: x_at(index), text: p.label.clone() })
        .collect();

    let gridlines = GRIDLINE_FRACTIONS
        .iter()
        .map(|&fraction| {
            let value = max_value * fraction;
            Gridline {
                y: frame.padding.top + (1.0 - fraction) * chart_height,
                value,
                label: format_axis_value(value),
            }
        })
        .collect();

    TimeSeriesPath::Plotted(TimeSeriesGeometry {
        width: frame.width,
        height: frame.height,
        max_value,
        area_path: SvgPath::area(&primary_points, frame.baseline()).into_string(),
        primary_path: SvgPath::polyline(&primary_points).into_string(),
        secondary_path: SvgPath::polyline(&secondary_points).into_string(),
        primary_points,
        secondary_points,
        x_labels,
        gridlines,
    })
}
