// Device domain model

pub const DEFAULT_DEVICE_ID: &str = "device_1";
pub const DEFAULT_DEVICE_PREFIX: &str = "device";
pub const DEFAULT_DEVICE_COUNT: usize = 5;

/// A simulated wearable, identified only by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: String,
}

impl Device {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Devices `device_0` through `device_{n-1}`.
#[allow(dead_code)]
pub fn generate_multiple_devices(n: usize) -> Vec<Device> {
    generate_devices_with_prefix(DEFAULT_DEVICE_PREFIX, n)
}

/// Devices named `{prefix}_{index}`, index starting at zero.
pub fn generate_devices_with_prefix(prefix: &str, n: usize) -> Vec<Device> {
    (0..n)
        .map(|i| Device::new(format!("{}_{}", prefix, i)))
        .collect()
}
