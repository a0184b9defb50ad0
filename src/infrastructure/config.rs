use crate::domain::device::{DEFAULT_DEVICE_COUNT, DEFAULT_DEVICE_ID, DEFAULT_DEVICE_PREFIX};
use crate::infrastructure::error::SimulatorError;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

const CONFIG_FILE: &str = "config/simulator";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub server: ServerSettings,
    pub devices: DevicesSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, SimulatorError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| SimulatorError::InvalidAddress {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DevicesSettings {
    pub default_device_id: String,
    pub prefix: String,
    pub count: usize,
}

impl Default for DevicesSettings {
    fn default() -> Self {
        Self {
            default_device_id: DEFAULT_DEVICE_ID.to_string(),
            prefix: DEFAULT_DEVICE_PREFIX.to_string(),
            count: DEFAULT_DEVICE_COUNT,
        }
    }
}

/// Load settings from `config/simulator.*` if present, falling back to built-in defaults.
pub fn load_simulator_config() -> Result<SimulatorConfig, SimulatorError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false));

    build_config(builder)
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<SimulatorConfig, SimulatorError> {
    let settings = builder.build()?;

    Ok(settings.try_deserialize()?)
}
