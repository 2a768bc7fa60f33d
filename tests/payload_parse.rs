use api_usage_chart_wasm::domain::telemetry::{
    DashboardPayload, HealthLevel, ServiceStatus, StatValue, TrendDirection,
};

const FULL_PAYLOAD: &str = r##"{
    "stats": [
        {"label": "Requests", "value": 128400, "delta": "+12%", "deltaDir": "up"},
        {"label": "Availability", "value": "99.98%", "deltaDir": "neutral"}
    ],
    "services": [
        {"name": "gateway", "status": "operational", "latencyMs": 42, "uptime": 99.9},
        {"name": "billing", "status": "maintenance"}
    ],
    "endpoints": [
        {
            "method": "get",
            "path": "/v1/users",
            "calls": 5400,
            "errorRate": 1.4,
            "p95Ms": 310,
            "sparkline": [0.1, 0.4, 0.9],
            "trend": "+3%",
            "trendDir": "up",
            "histogram": [{"label": "<100ms", "count": 12, "height": 0.5}]
        },
        {"method": "POST", "path": "/v1/orders", "errorRate": 0.2, "health": "bad"}
    ],
    "chartPoints": [{"hour": "00:00", "success": 100, "error": 5}],
    "statusBreakdown": [{"label": "2xx", "percentage": 97.5, "colorToken": "ok"}],
    "alert": "Elevated latency on /v1/users"
}"##;

#[test]
fn parses_rich_payload_with_aliases() {
    let payload = DashboardPayload::from_json(FULL_PAYLOAD).unwrap();

    assert_eq!(payload.stats[0].value, StatValue::Number(128400.0));
    assert_eq!(payload.stats[0].value.to_string(), "128.4k");
    assert_eq!(payload.stats[1].value, StatValue::Text("99.98%".to_string()));
    assert_eq!(payload.stats[1].delta_dir, Some(TrendDirection::Flat));

    assert_eq!(payload.services[0].status, ServiceStatus::Operational);
    assert_eq!(payload.services[0].latency_ms, Some(42.0));
    assert_eq!(payload.services[1].status, ServiceStatus::Unknown);

    assert_eq!(payload.status_code_breakdown[0].color, "ok");
    assert_eq!(payload.endpoints[0].histogram[0].relative_height, 0.5);
    assert_eq!(payload.alert_text(), Some("Elevated latency on /v1/users"));
}

#[test]
fn endpoint_identity_and_health() {
    let payload = DashboardPayload::from_json(FULL_PAYLOAD).unwrap();
    let users = &payload.endpoints[0];
    let orders = &payload.endpoints[1];

    assert_eq!(users.row_key(), "GET /v1/users");
    assert_eq!(users.health_level(), HealthLevel::Warn);
    assert_eq!(users.p95_ms, Some(310.0));
    assert_eq!(users.p50_ms, None);

    assert_eq!(orders.health_level(), HealthLevel::Bad);
    assert_eq!(orders.calls, 0);
    assert!(orders.sparkline.is_empty());
}

#[test]
fn missing_sections_default_to_empty() {
    let payload = DashboardPayload::from_json("{}").unwrap();
    assert_eq!(payload, DashboardPayload::default());
    assert!(payload.traffic_series().is_empty());
    assert_eq!(payload.alert_text(), None);
}

#[test]
fn blank_alert_counts_as_absent() {
    let payload = DashboardPayload::from_json(r#"{"alert": "   "}"#).unwrap();
    assert_eq!(payload.alert_text(), None);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(DashboardPayload::from_json(r#"{"endpoints": 3}"#).is_err());
}
