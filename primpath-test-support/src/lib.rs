//! Shared test utilities used across primpath crates.

pub mod ci;
pub mod tracing;
