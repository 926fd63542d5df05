pub mod api_client;
pub mod configuration;
pub mod domain;
pub mod expectations;
pub mod fixtures;
pub mod telemetry;
pub mod verifier;
