//! Shared errors, configuration, and telemetry for AMoney.
//!
//! This crate provides the cross-cutting pieces around the money core:
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber initialization

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{AppConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
