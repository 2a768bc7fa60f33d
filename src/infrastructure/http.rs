use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::domain::{
    errors::DashboardError,
    logging::{LogComponent, get_logger},
    telemetry::{DashboardPayload, PayloadSource, TimeWindow},
};

/// `base_url` with the `window` query parameter appended.
pub fn window_url(base_url: &str, window: TimeWindow) -> String {
    let separator = match base_url.find('?') {
        None => "?",
        Some(_) if base_url.ends_with('?') || base_url.ends_with('&') => "",
        Some(_) => "&",
    };
    format!("{base_url}{separator}window={}", urlencoding::encode(window.as_query_value()))
}

/// Fetches dashboard payloads over HTTP with gloo-net.
#[derive(Clone, Debug)]
pub struct HttpPayloadSource {
    headers: Vec<(String, String)>,
}

impl Default for HttpPayloadSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPayloadSource {
    pub fn new() -> Self {
        Self { headers: vec![("Accept".to_string(), "application/json".to_string())] }
    }

    pub async fn get_payload(
        url: String,
        headers: Vec<(String, String)>,
    ) -> Result<DashboardPayload, DashboardError> {
        get_logger().debug(LogComponent::Infrastructure("HTTP"), &format!("🌐 GET {url}"));

        let mut request = Request::get(&url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("Request failed: {e}")))?;

        if !response.ok() {
            let err = DashboardError::http(response.status(), response.status_text());
            get_logger().error(
                LogComponent::Infrastructure("HTTP"),
                &format!("❌ {url}: {err} {}", response.status_text()),
            );
            return Err(err);
        }

        let payload = response
            .json::<DashboardPayload>()
            .await
            .map_err(|e| DashboardError::Decode(e.to_string()))?;

        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!(
                "✅ {} endpoints, {} chart points",
                payload.endpoints.len(),
                payload.chart_points.len()
            ),
        );

        Ok(payload)
    }
}

impl PayloadSource for HttpPayloadSource {
    fn fetch_payload(&self, url: &str) -> LocalBoxFuture<'static, Result<DashboardPayload, DashboardError>> {
        Self::get_payload(url.to_string(), self.headers.clone()).boxed_local()
    }
}
