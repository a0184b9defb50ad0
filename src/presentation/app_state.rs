// Application state for HTTP handlers
use crate::application::telemetry_service::TelemetryService;

#[derive(Clone)]
pub struct AppState {
    pub telemetry_service: TelemetryService,
}
