//! This module contains the pure, stateless text kernels of ese-core.
//!
//! Kernels know nothing about the host runtime: they take borrowed Rust data and
//! return plain values. Marshaling lives in `bridge` and `ffi`.

pub mod word_count;

pub use word_count::{count_words, count_words_in_bytes, is_word_separator};
