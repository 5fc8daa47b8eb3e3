// In: src/error.rs

//! This module defines the single, unified error type for the entire minscan library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinScanError {
    // =========================================================================
    // === Core Errors (the scan itself)
    // =========================================================================
    /// The only way a scan can fail: there is no element to return.
    #[error("Cannot find the minimum of an empty sequence")]
    EmptyInput,

    // =========================================================================
    // === Bridge / Marshalling Errors
    // =========================================================================
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Buffer length mismatch: got {0} bytes, expected a multiple of {1}")]
    BufferMismatch(usize, usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the Arrow library, typically a failed cast.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error from the Serde JSON library while reading a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

#[cfg(feature = "python")]
impl From<pyo3::PyErr> for MinScanError {
    fn from(err: pyo3::PyErr) -> Self {
        MinScanError::FfiError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<MinScanError> for pyo3::PyErr {
    fn from(err: MinScanError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
