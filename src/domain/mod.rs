// Domain layer - Core value types
pub mod device;
pub mod telemetry;
