// Application layer - Use cases
pub mod telemetry_generator;
pub mod telemetry_service;
