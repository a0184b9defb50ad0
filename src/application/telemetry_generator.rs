// Telemetry generator - Fabricates readings for a device
use crate::domain::telemetry::{
    TelemetryRecord, BATTERY_LEVEL_RANGE, HEART_RATE_RANGE, STEPS_RANGE,
};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryGenerator;

impl TelemetryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh record for `device_id` using the thread-local RNG and the system clock.
    ///
    /// The id is echoed as-is; an empty id is accepted.
    pub fn generate(&self, device_id: &str) -> TelemetryRecord {
        Self::generate_with(&mut rand::rng(), Utc::now(), device_id)
    }

    pub fn generate_with<R: Rng>(
        rng: &mut R,
        now: DateTime<Utc>,
        device_id: &str,
    ) -> TelemetryRecord {
        let record = TelemetryRecord::new(
            device_id.to_string(),
            rng.random_range(HEART_RATE_RANGE),
            rng.random_range(STEPS_RANGE),
            now.to_rfc3339_opts(SecondsFormat::Micros, true),
            rng.random_range(BATTERY_LEVEL_RANGE),
        );
        debug_assert!(record.is_within_bounds());
        record
    }
}
