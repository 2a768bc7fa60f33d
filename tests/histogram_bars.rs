use api_usage_chart_wasm::domain::chart::{
    BarTone, HistogramFrame, Palette, compute_histogram_bars,
};
use api_usage_chart_wasm::domain::telemetry::HistogramBucket;
use insta::assert_json_snapshot;
use quickcheck_macros::quickcheck;

fn bucket(label: &str, count: u64, relative_height: f64) -> HistogramBucket {
    HistogramBucket { label: label.to_string(), count, relative_height }
}

fn latency_buckets() -> Vec<HistogramBucket> {
    vec![
        bucket("<50ms", 0, 0.0),
        bucket("<100ms", 3, 0.1),
        bucket("<200ms", 12, 0.16),
        bucket("<400ms", 40, 0.5),
        bucket("<800ms", 57, 0.71),
        bucket("≥800ms", 80, 1.0),
    ]
}

#[test]
fn bar_summary_snapshot() {
    let bars =
        compute_histogram_bars(&latency_buckets(), &HistogramFrame::default(), &Palette::default());
    let summary: Vec<_> = bars
        .iter()
        .map(|bar| (bar.label.clone(), format!("{:.2}", bar.height_fraction), bar.tone, bar.count_label.clone()))
        .collect();

    assert_json_snapshot!(summary, @r###"
    [
      [
        "<50ms",
        "0.02",
        "accentMid",
        null
      ],
      [
        "<100ms",
        "0.10",
        "accentMid",
        null
      ],
      [
        "<200ms",
        "0.16",
        "accentMid",
        "12"
      ],
      [
        "<400ms",
        "0.50",
        "accent",
        "40"
      ],
      [
        "<800ms",
        "0.71",
        "danger",
        "57"
      ],
      [
        "≥800ms",
        "1.00",
        "danger",
        "80"
      ]
    ]
    "###);
}

#[test]
fn thresholds_are_strict() {
    assert_eq!(BarTone::for_relative_height(0.7), BarTone::Accent);
    assert_eq!(BarTone::for_relative_height(0.4), BarTone::AccentMid);

    let bars = compute_histogram_bars(
        &[bucket("edge", 9, 0.15)],
        &HistogramFrame::default(),
        &Palette::default(),
    );
    assert_eq!(bars[0].count_label, None);
}

#[test]
fn bars_tile_the_frame_width() {
    let frame = HistogramFrame::default();
    let bars = compute_histogram_bars(&latency_buckets(), &frame, &Palette::default());

    let last = bars.last().unwrap();
    assert!((last.x + last.width - frame.width).abs() < 1e-9);
    for bar in &bars {
        assert!((bar.y + bar.height - frame.height).abs() < 1e-9);
    }
    assert_eq!(bars[4].color, "#ef4444");
}

#[test]
fn no_buckets_no_bars() {
    assert!(compute_histogram_bars(&[], &HistogramFrame::default(), &Palette::default()).is_empty());
}

#[quickcheck]
fn height_never_below_floor(heights: Vec<u8>) -> bool {
    let buckets: Vec<HistogramBucket> =
        heights.iter().map(|h| bucket("b", *h as u64, *h as f64 / 255.0)).collect();
    compute_histogram_bars(&buckets, &HistogramFrame::default(), &Palette::default())
        .iter()
        .all(|bar| bar.height_fraction >= 0.02)
}
