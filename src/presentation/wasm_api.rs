//! JavaScript entry points.
//!
//! Only a bridge: config is validated here and everything else is handed to
//! the Leptos component.

use wasm_bindgen::prelude::*;

use crate::app::ApiDashboard;
use crate::application::DashboardConfig;
use crate::domain::logging::{LogComponent, get_logger};

/// Mount a dashboard into `document.body`.
///
/// ```js
/// mountDashboard({ apiUrl: "/api/usage", pageSize: 10, refreshIntervalSecs: 60, logLevel: "debug" });
/// ```
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(config: JsValue) -> Result<(), JsValue> {
    let config = DashboardConfig::from_js(&config).map_err(|e| {
        get_logger().error(LogComponent::Presentation("WASM"), &format!("❌ {}", e));
        JsValue::from_str(&e.to_string())
    })?;

    if let Some(level) = config.log_level() {
        get_logger().set_min_level(level);
    }
    get_logger().info(
        LogComponent::Presentation("WASM"),
        &format!("🚀 Mounting dashboard for {}", config.api_url),
    );
    leptos::mount_to_body(move || leptos::view! { <ApiDashboard config=config /> });
    Ok(())
}

/// Query value for a window token such as `"7d"`; errors on unknown tokens.
#[wasm_bindgen(js_name = windowQueryValue)]
pub fn window_query_value(token: &str) -> Result<String, JsValue> {
    token
        .parse::<crate::domain::telemetry::TimeWindow>()
        .map(|window| window.as_query_value().to_string())
        .map_err(|_| JsValue::from_str(&format!("Unknown time window: {}", token)))
}
