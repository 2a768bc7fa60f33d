//! Number formatting for axis labels, stat cards and table cells.

/// Gridline label: `1.2k` from 1000 upward, otherwise the rounded integer.
pub fn format_axis_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Short human count: `950`, `1.5k`, `2.5M`.
pub fn format_compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

pub fn format_latency_ms(ms: f64) -> String {
    if ms >= 1000.0 { format!("{:.2}s", ms / 1000.0) } else { format!("{}ms", ms.round() as i64) }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
