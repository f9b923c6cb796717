//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use primpath_core::PrimPathError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The requested graph shape cannot be generated.
    #[error("invalid synthetic graph configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: &'static str,
    },
    /// A generated value does not fit the signed input representation.
    #[error("{context} does not fit in a signed 64-bit integer")]
    Overflow {
        /// The value being converted.
        context: &'static str,
    },
    /// Building the graph or running the pipeline failed.
    #[error("primpath operation failed: {0}")]
    Core(#[from] PrimPathError),
}
