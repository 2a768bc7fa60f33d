use gloo::utils::format::JsValueSerdeExt;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::domain::{errors::DashboardError, logging::LogLevel, telemetry::TimeWindow};
use crate::view_state::PageSize;

pub const DEFAULT_TITLE: &str = "API Usage";

/// Configuration surface of one dashboard widget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub api_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub initial_window: Option<TimeWindow>,
    /// Re-fetch the active window this often; `None` or 0 disables polling.
    #[serde(default)]
    pub refresh_interval_secs: Option<u32>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl DashboardConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            title: None,
            page_size: None,
            initial_window: None,
            refresh_interval_secs: None,
            log_level: None,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, DashboardError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| DashboardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a plain JS object such as `{ apiUrl: "/api/usage", pageSize: 10 }`.
    pub fn from_js(value: &JsValue) -> Result<Self, DashboardError> {
        let config: Self = value.into_serde().map_err(|e| DashboardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.api_url.trim().is_empty() {
            return Err(DashboardError::Config("apiUrl must not be empty".to_string()));
        }
        if self.page_size == Some(0) {
            return Err(DashboardError::Config("pageSize must be a positive integer".to_string()));
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or(DEFAULT_TITLE)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size.and_then(PageSize::new).unwrap_or_default()
    }

    pub fn initial_window(&self) -> TimeWindow {
        self.initial_window.unwrap_or_default()
    }

    pub fn refresh_interval_ms(&self) -> Option<u32> {
        self.refresh_interval_secs.filter(|secs| *secs > 0).map(|secs| secs.saturating_mul(1000))
    }

    /// Console threshold requested by the host; `None` keeps the build default.
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level
    }
}
