//! This module serves as the public API for the Foreign Function Interface (FFI) layer.
//!
//! Each host runtime gets one sub-module that implements `bridge::TextBoundary`
//! for its value types and wraps the stateless API in host-callable functions.
//! Currently only CPython is supported.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
// Used by `lib.rs` to assemble the Python module.
pub use self::python::{analyze_text_py, enable_verbose_logging_py, hello_py, PythonBoundary};
