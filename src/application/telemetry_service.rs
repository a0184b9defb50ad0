// Telemetry service - Use cases for the single device and the fleet
use crate::application::telemetry_generator::TelemetryGenerator;
use crate::domain::device::{generate_devices_with_prefix, Device};
use crate::domain::telemetry::TelemetryRecord;
use crate::infrastructure::config::DevicesSettings;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TelemetryService {
    default_device: Device,
    fleet: Arc<[Device]>,
    generator: TelemetryGenerator,
}

impl TelemetryService {
    pub fn new(default_device: Device, fleet: Vec<Device>, generator: TelemetryGenerator) -> Self {
        Self {
            default_device,
            fleet: fleet.into(),
            generator,
        }
    }

    pub fn from_config(settings: &DevicesSettings) -> Self {
        Self::new(
            Device::new(settings.default_device_id.clone()),
            generate_devices_with_prefix(&settings.prefix, settings.count),
            TelemetryGenerator::new(),
        )
    }

    pub fn default_device(&self) -> &Device {
        &self.default_device
    }

    pub fn fleet(&self) -> &[Device] {
        &self.fleet
    }

    pub fn default_telemetry(&self) -> TelemetryRecord {
        let record = self.generator.generate(&self.default_device.id);
        tracing::debug!("Generated telemetry for {}", record.device_id);
        record
    }

    /// One record per fleet device, in creation order.
    pub fn fleet_telemetry(&self) -> Vec<TelemetryRecord> {
        let records: Vec<TelemetryRecord> = self
            .fleet
            .iter()
            .map(|device| self.generator.generate(&device.id))
            .collect();
        tracing::debug!("Generated telemetry for {} devices", records.len());
        records
    }
}
