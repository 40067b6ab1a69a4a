//! Error handling primitives shared across the core.
//!
//! Errors never cross the FFI boundary as values; the export seam turns them
//! into the null BSTR sentinel.

use thiserror::Error;

/// Canonical error type for the core.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ExportError {
    /// The allocator returned nothing, or the request does not fit the 32-bit
    /// byte-length prefix.
    #[error("allocation of a {units} code unit string failed")]
    AllocationFailure {
        /// Code units requested.
        units: usize,
    },
}

/// Result alias used throughout the crate.
pub type ExportResult<T> = Result<T, ExportError>;

impl ExportError {
    /// Allocation failure helper.
    pub const fn allocation_failure(units: usize) -> Self {
        Self::AllocationFailure { units }
    }
}
