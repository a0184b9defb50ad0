// Telemetry domain model
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Beats per minute
pub const HEART_RATE_RANGE: RangeInclusive<u32> = 60..=120;
pub const STEPS_RANGE: RangeInclusive<u32> = 0..=1000;
/// Percent
pub const BATTERY_LEVEL_RANGE: RangeInclusive<u32> = 10..=100;

/// A single snapshot of simulated device vitals.
///
/// Field order matches the JSON shape consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub device_id: String,
    pub heart_rate: u32,
    pub steps: u32,
    pub timestamp: String,
    pub battery_level: u32,
}

impl TelemetryRecord {
    pub fn new(
        device_id: String,
        heart_rate: u32,
        steps: u32,
        timestamp: String,
        battery_level: u32,
    ) -> Self {
        Self {
            device_id,
            heart_rate,
            steps,
            timestamp,
            battery_level,
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        HEART_RATE_RANGE.contains(&self.heart_rate)
            && STEPS_RANGE.contains(&self.steps)
            && BATTERY_LEVEL_RANGE.contains(&self.battery_level)
    }
}
