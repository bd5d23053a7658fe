//! This module defines the single, unified error type for the ese-core library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use pyo3::exceptions::{PyOSError, PyTypeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EseError {
    // =========================================================================
    // === Boundary Errors (raised before the counting core is reached)
    // =========================================================================
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, raised by the JSON boundary.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (e.g. the log file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<PyErr> for EseError {
    fn from(err: PyErr) -> Self {
        EseError::FfiError(err.to_string())
    }
}

impl From<EseError> for PyErr {
    fn from(err: EseError) -> PyErr {
        match err {
            EseError::InvalidArgument(msg) => PyTypeError::new_err(msg),
            EseError::Io(e) => PyOSError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}
