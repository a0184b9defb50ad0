// Route table and middleware
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_all_telemetry, get_telemetry, health_check};
use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/telemetry", get(get_telemetry))
        .route("/telemetry/all", get(get_all_telemetry))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
        .with_state(state)
}

/// Any origin may read from the simulator.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::telemetry_service::TelemetryService;
    use crate::domain::telemetry::TelemetryRecord;
    use crate::infrastructure::config::DevicesSettings;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, Response, StatusCode},
    };
    use chrono::DateTime;
    use serde_json::Value;
    use std::collections::HashSet;
    use tower::ServiceExt;

    fn test_app(devices: DevicesSettings) -> Router {
        let state = Arc::new(AppState {
            telemetry_service: TelemetryService::from_config(&devices),
        });
        build_router(state)
    }

    async fn get_request(app: Router, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_record(value: &Value, device_id: &str) {
        let record: TelemetryRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.device_id, device_id);
        assert!(record.is_within_bounds(), "{:?}", record);
        assert!(DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
        for field in ["device_id", "heart_rate", "steps", "timestamp", "battery_level"] {
            assert!(!value[field].is_null(), "missing {}", field);
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = get_request(test_app(DevicesSettings::default()), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            &bytes[..],
            br#"{"status":"ok","message":"Device Simulator API is running"}"#
        );
    }

    #[tokio::test]
    async fn test_single_device_telemetry() {
        let response = get_request(test_app(DevicesSettings::default()), "/telemetry").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let json = body_json(response).await;
        assert!(json.is_object());
        assert_record(&json, "device_1");
    }

    #[tokio::test]
    async fn test_all_devices_telemetry() {
        let response = get_request(test_app(DevicesSettings::default()), "/telemetry/all").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let records = json.as_array().unwrap();
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_record(record, &format!("device_{}", i));
        }
    }

    #[tokio::test]
    async fn test_empty_fleet_returns_empty_array() {
        let devices = DevicesSettings {
            count: 0,
            ..DevicesSettings::default()
        };
        let json = body_json(get_request(test_app(devices), "/telemetry/all").await).await;
        assert_eq!(json, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_telemetry_varies_between_requests() {
        let app = test_app(DevicesSettings::default());
        let mut readings = HashSet::new();

        for _ in 0..50 {
            let json = body_json(get_request(app.clone(), "/telemetry").await).await;
            readings.insert((
                json["heart_rate"].as_u64().unwrap(),
                json["steps"].as_u64().unwrap(),
                json["battery_level"].as_u64().unwrap(),
            ));
        }

        assert!(readings.len() > 1);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/telemetry")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = test_app(DevicesSettings::default())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/telemetry/all")
            .header(header::ORIGIN, "http://dashboard.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = test_app(DevicesSettings::default())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("GET"), "got {}", methods);
    }

    #[tokio::test]
    async fn test_gzip_when_accepted() {
        let request = Request::builder()
            .uri("/telemetry/all")
            .header(header::ACCEPT_ENCODING, "gzip")
            .body(Body::empty())
            .unwrap();
        let response = test_app(DevicesSettings::default())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = get_request(test_app(DevicesSettings::default()), "/telemetry/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/telemetry")
            .body(Body::empty())
            .unwrap();
        let response = test_app(DevicesSettings::default())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
