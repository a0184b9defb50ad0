// HTTP request handlers
use crate::domain::telemetry::TelemetryRecord;
use crate::presentation::app_state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

pub const STATUS_MESSAGE: &str = "Device Simulator API is running";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Liveness probe
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        message: STATUS_MESSAGE,
    })
}

/// Telemetry from the default device
pub async fn get_telemetry(State(state): State<Arc<AppState>>) -> Json<TelemetryRecord> {
    Json(state.telemetry_service.default_telemetry())
}

/// Telemetry from every fleet device
pub async fn get_all_telemetry(State(state): State<Arc<AppState>>) -> Json<Vec<TelemetryRecord>> {
    Json(state.telemetry_service.fleet_telemetry())
}
