//! Infrastructure adapters and runtime bootstrap.

pub mod error;
pub mod fs;
pub mod json;
pub mod telemetry;
