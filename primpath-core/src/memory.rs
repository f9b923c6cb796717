//! Fallible allocation for per-vertex working arrays.
//!
//! Every stage sizes its arrays by the vertex count. Reserving through
//! [`Vec::try_reserve_exact`] turns exhaustion into
//! [`PrimPathError::AllocationFailure`] instead of an abort, so a caller can
//! report the failure like any other pipeline error.

use crate::error::{PrimPathError, Result};

/// Allocates a vector of `len` copies of `value`.
///
/// `resource` names the array in the resulting error.
pub(crate) fn try_filled<T: Clone>(resource: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| PrimPathError::AllocationFailure {
            resource,
            requested: len,
        })?;
    buffer.resize(len, value);
    Ok(buffer)
}
