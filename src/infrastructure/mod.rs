// Infrastructure layer - Configuration and startup plumbing
pub mod config;
pub mod error;
