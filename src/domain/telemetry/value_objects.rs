use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Relative time range the dashboard asks the endpoint for.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TimeWindow {
    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,

    #[strum(serialize = "6h")]
    #[serde(rename = "6h")]
    SixHours,

    #[default]
    #[strum(serialize = "24h")]
    #[serde(rename = "24h")]
    TwentyFourHours,

    #[strum(serialize = "7d")]
    #[serde(rename = "7d")]
    SevenDays,

    #[strum(serialize = "30d")]
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl TimeWindow {
    /// Token sent as the `window` query parameter.
    pub fn as_query_value(&self) -> &str {
        self.as_ref()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OneHour => "Last hour",
            Self::SixHours => "Last 6 hours",
            Self::TwentyFourHours => "Last 24 hours",
            Self::SevenDays => "Last 7 days",
            Self::ThirtyDays => "Last 30 days",
        }
    }
}

/// Three-way health used to color sparklines and row badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    #[default]
    #[display(fmt = "ok")]
    Ok,
    #[display(fmt = "warn")]
    Warn,
    #[display(fmt = "bad")]
    Bad,
}

impl HealthLevel {
    /// Error rate in percent at or above which a row is flagged `Warn`.
    pub const WARN_ERROR_RATE: f64 = 1.0;
    /// Error rate in percent at or above which a row is flagged `Bad`.
    pub const BAD_ERROR_RATE: f64 = 5.0;

    pub fn from_error_rate(error_rate_pct: f64) -> Self {
        if error_rate_pct >= Self::BAD_ERROR_RATE {
            Self::Bad
        } else if error_rate_pct >= Self::WARN_ERROR_RATE {
            Self::Warn
        } else {
            Self::Ok
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    #[serde(alias = "neutral")]
    Flat,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[display(fmt = "Operational")]
    #[serde(alias = "up", alias = "ok")]
    Operational,
    #[display(fmt = "Degraded")]
    Degraded,
    #[display(fmt = "Down")]
    #[serde(alias = "outage")]
    Down,
    #[default]
    #[display(fmt = "Unknown")]
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    pub fn health(&self) -> HealthLevel {
        match self {
            Self::Operational => HealthLevel::Ok,
            Self::Degraded | Self::Unknown => HealthLevel::Warn,
            Self::Down => HealthLevel::Bad,
        }
    }
}

/// Headline stat value: servers send either a bare number or a preformatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl Default for StatValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => {
                write!(f, "{}", crate::domain::chart::format::format_compact(*value))
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}
