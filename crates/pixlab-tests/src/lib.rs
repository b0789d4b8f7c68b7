//! Integration tests for pixlab crates.
//!
//! End-to-end checks across the buffer, pipeline, rasterizer and color
//! crates: raw file round trips and properties that must hold for any
//! input, exercised on pseudo-random buffers.
