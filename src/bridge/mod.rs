// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of ese-core. It sits between the pure
// `kernels` and whatever host runtime is calling in.
//
// Data Flow (analyzeText):
//
//   1. [Host Adapter (ffi::python / JsonBoundary)] -> Receives host arguments
//         |
//         `-> TextBoundary::decode -> String (or InvalidArgument)
//
//   2. [Stateless API (analyze_text)]               -> Receives `&str`
//         |
//         `-> kernels::word_count::count_words -> AnalysisResult
//
//   3. [Host Adapter]                               -> TextBoundary::encode -> host record
//
// ====================================================================================
pub mod boundary;
pub mod format;
pub mod stateless_api;

pub use boundary::{JsonBoundary, TextBoundary};
pub use format::AnalysisResult;
pub use stateless_api::{analyze_text, analyze_with, hello};
