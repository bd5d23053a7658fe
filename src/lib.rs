//! This file is the root of the `ese_core` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring the top-level modules of the library.
//! 2.  Defining the `#[pymodule]` which acts as the entry point when the
//!     compiled library is imported into Python.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod ffi;
pub mod kernels;

pub use observability::init_logging;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

/// The `ese_core` Python module.
#[pymodule]
fn ese_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::hello_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::analyze_text_py, m)?)?;
    // --- snake_case alias for Python callers ---
    m.add("analyze_text", m.getattr("analyzeText")?)?;

    // --- Expose the argument error type by name ---
    m.add("InvalidArgument", m.py().get_type_bound::<PyTypeError>())?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
