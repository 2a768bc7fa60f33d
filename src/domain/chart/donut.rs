use serde::Serialize;

use super::value_objects::{DonutStyle, Palette, Point};
use crate::domain::telemetry::StatusSlice;

/// Arcs start at 12 o'clock.
pub const BASE_ROTATION_DEG: f64 = -90.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutArc {
    pub label: String,
    pub color: String,
    pub percentage: f64,
    /// Stroke length along the circumference.
    pub length: f64,
    /// Circumference consumed by the slices before this one.
    pub offset: f64,
    /// `stroke-dasharray` value: arc length, then the remaining gap.
    pub dash_array: String,
    /// `stroke-dashoffset` value.
    pub dash_offset: f64,
    pub start_angle_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutGeometry {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub circumference: f64,
    pub rotation_deg: f64,
    pub arcs: Vec<DonutArc>,
    pub center_label: String,
}

/// Lay slices around the ring in input order.
///
/// No sorting, no normalization and no gaps: each arc consumes
/// `percentage / 100` of the circumference, so totals off 100 leave the ring
/// short or overlapping. The center label is always the first slice's share.
pub fn compute_donut_arcs(slices: &[StatusSlice], style: &DonutStyle, palette: &Palette) -> DonutGeometry {
    let circumference = style.circumference();
    let mut offset = 0.0;
    let mut arcs = Vec::with_capacity(slices.len());

    for slice in slices {
        let length = slice.percentage / 100.0 * circumference;
        arcs.push(DonutArc {
            label: slice.label.clone(),
            color: palette.resolve(&slice.color),
            percentage: slice.percentage,
            length,
            offset,
            dash_array: format!("{:.2} {:.2}", length, circumference - length),
            dash_offset: -offset,
            start_angle_deg: BASE_ROTATION_DEG + offset / circumference * 360.0,
        });
        offset += length;
    }

    let center_label = slices.first().map(|s| format!("{}%", s.percentage)).unwrap_or_default();

    DonutGeometry {
        center: style.center,
        radius: style.radius,
        stroke_width: style.stroke_width,
        circumference,
        rotation_deg: BASE_ROTATION_DEG,
        arcs,
        center_label,
    }
}
