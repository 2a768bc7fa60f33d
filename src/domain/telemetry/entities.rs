use serde::{Deserialize, Serialize};

use super::value_objects::{HealthLevel, ServiceStatus, StatValue, TrendDirection};

/// Pre-aggregated usage summary returned by the telemetry endpoint.
///
/// Every collection defaults to empty so a partial payload still renders:
/// short or missing series turn into blank charts further down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardPayload {
    pub stats: Vec<StatCard>,
    pub services: Vec<ServiceHealth>,
    pub endpoints: Vec<EndpointStats>,
    pub chart_points: Vec<ChartPoint>,
    #[serde(alias = "statusBreakdown")]
    pub status_code_breakdown: Vec<StatusSlice>,
    /// Plain text, never interpreted as markup.
    pub alert: Option<String>,
}

impl DashboardPayload {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Request/error series for the traffic chart.
    pub fn traffic_series(&self) -> Vec<SeriesPoint> {
        self.chart_points.iter().map(SeriesPoint::from).collect()
    }

    /// Alert text, or `None` when absent or blank.
    pub fn alert_text(&self) -> Option<&str> {
        self.alert.as_deref().map(str::trim).filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatCard {
    pub label: String,
    pub value: StatValue,
    pub delta: Option<String>,
    pub delta_dir: Option<TrendDirection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceHealth {
    pub name: String,
    pub status: ServiceStatus,
    pub latency_ms: Option<f64>,
    pub uptime: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointStats {
    pub method: String,
    pub path: String,
    pub calls: u64,
    /// Percentage of failed calls, 0–100.
    pub error_rate: f64,
    pub p50_ms: Option<f64>,
    pub p95_ms: Option<f64>,
    /// Caller-normalized samples in [0, 1].
    pub sparkline: Vec<f64>,
    pub trend: Option<String>,
    pub trend_dir: Option<TrendDirection>,
    pub histogram: Vec<HistogramBucket>,
    pub health: Option<HealthLevel>,
}

impl EndpointStats {
    /// Stable identity used for row expansion.
    pub fn row_key(&self) -> String {
        format!("{} {}", self.method.to_uppercase(), self.path)
    }

    /// Explicit `health` wins; otherwise derived from the error rate.
    pub fn health_level(&self) -> HealthLevel {
        self.health.unwrap_or_else(|| HealthLevel::from_error_rate(self.error_rate))
    }
}

/// One hour (or day) of the traffic chart as sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPoint {
    pub hour: String,
    pub success: f64,
    pub error: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusSlice {
    pub label: String,
    /// Share in percent; slices are not required to sum to 100.
    pub percentage: f64,
    #[serde(alias = "colorToken")]
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistogramBucket {
    pub label: String,
    pub count: u64,
    /// Height relative to the tallest bucket of the same endpoint, 0–1.
    #[serde(alias = "height")]
    pub relative_height: f64,
}

/// Engine-facing time series sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub primary: f64,
    pub secondary: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, primary: f64, secondary: f64) -> Self {
        Self { label: label.into(), primary, secondary }
    }
}

impl From<&ChartPoint> for SeriesPoint {
    fn from(point: &ChartPoint) -> Self {
        Self::new(point.hour.clone(), point.success, point.error)
    }
}
