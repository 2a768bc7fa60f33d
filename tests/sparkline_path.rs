use api_usage_chart_wasm::domain::chart::{Palette, SparklineFrame, compute_sparkline_path};
use api_usage_chart_wasm::domain::telemetry::HealthLevel;

#[test]
fn fewer_than_two_values_is_empty() {
    let frame = SparklineFrame::default();
    for values in [&[][..], &[0.5][..]] {
        let geometry = compute_sparkline_path(values, HealthLevel::Ok, &frame, &Palette::default());
        assert!(geometry.is_empty());
        assert_eq!(geometry.area_path, "");
        assert_eq!(geometry.marker, None);
        assert_eq!((geometry.width, geometry.height), (120.0, 32.0));
    }
}

#[test]
fn points_span_frame_minus_end_padding() {
    let frame = SparklineFrame::default();
    let geometry =
        compute_sparkline_path(&[0.0, 0.5, 1.0], HealthLevel::Ok, &frame, &Palette::default());

    // span = 32 - 2*3 - 2 = 24
    assert_eq!(geometry.line_path, "M0.00,27.00 L57.00,15.00 L114.00,3.00");
    assert_eq!(
        geometry.area_path,
        "M0.00,27.00 L57.00,15.00 L114.00,3.00 L114.00,32.00 L0.00,32.00 Z"
    );
    let marker = geometry.marker.unwrap();
    assert_eq!((marker.x, marker.y), (114.0, 3.0));
}

#[test]
fn out_of_range_values_are_not_clamped() {
    let frame = SparklineFrame::default();
    let geometry = compute_sparkline_path(&[-1.0, 2.0], HealthLevel::Ok, &frame, &Palette::default());
    let marker = geometry.marker.unwrap();
    assert!(marker.y < 0.0);
    assert!(geometry.line_path.starts_with("M0.00,51.00"));
}

#[test]
fn color_follows_level_only() {
    let palette = Palette::default();
    let frame = SparklineFrame::default();
    let values = [0.2, 0.9, 0.4];
    let colors: Vec<String> = [HealthLevel::Ok, HealthLevel::Warn, HealthLevel::Bad]
        .into_iter()
        .map(|level| compute_sparkline_path(&values, level, &frame, &palette).color)
        .collect();
    assert_eq!(colors, ["#22c55e", "#f59e0b", "#ef4444"]);
}
