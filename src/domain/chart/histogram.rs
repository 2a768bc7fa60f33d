use serde::Serialize;

use super::value_objects::{HistogramFrame, Palette};
use crate::domain::telemetry::HistogramBucket;

/// Floor on the drawn height so empty buckets stay visible as a sliver.
pub const MIN_HEIGHT_FRACTION: f64 = 0.02;
/// Buckets at or below this relative height get no count label.
pub const COUNT_LABEL_THRESHOLD: f64 = 0.15;
pub const DANGER_THRESHOLD: f64 = 0.7;
pub const ACCENT_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BarTone {
    Danger,
    Accent,
    AccentMid,
}

impl BarTone {
    pub fn for_relative_height(relative_height: f64) -> Self {
        if relative_height > DANGER_THRESHOLD {
            Self::Danger
        } else if relative_height > ACCENT_THRESHOLD {
            Self::Accent
        } else {
            Self::AccentMid
        }
    }
}

impl Palette {
    pub fn tone_color(&self, tone: BarTone) -> String {
        match tone {
            BarTone::Danger => self.danger,
            BarTone::Accent => self.accent,
            BarTone::AccentMid => self.accent_mid,
        }
        .to_css()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBar {
    pub label: String,
    pub count: u64,
    pub height_fraction: f64,
    pub tone: BarTone,
    pub color: String,
    pub count_label: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn compute_histogram_bars(
    buckets: &[HistogramBucket],
    frame: &HistogramFrame,
    palette: &Palette,
) -> Vec<HistogramBar> {
    if buckets.is_empty() {
        return Vec::new();
    }

    let n = buckets.len() as f64;
    let bar_width = ((frame.width - frame.gap * (n - 1.0)) / n).max(0.0);

    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let height_fraction = bucket.relative_height.max(MIN_HEIGHT_FRACTION);
            let tone = BarTone::for_relative_height(bucket.relative_height);
            let height = height_fraction * frame.height;
            HistogramBar {
                label: bucket.label.clone(),
                count: bucket.count,
                height_fraction,
                tone,
                color: palette.tone_color(tone),
                count_label: (bucket.relative_height > COUNT_LABEL_THRESHOLD)
                    .then(|| bucket.count.to_string()),
                x: i as f64 * (bar_width + frame.gap),
                y: frame.height - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}
