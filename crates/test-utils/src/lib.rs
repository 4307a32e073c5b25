//! Shared test utilities for the spectra geoparquet workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Geoparquet fixture files laid out like the remote archive
//! - Well-known-binary geometry encoders
//! - A tolerance check for decoded points
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{sample_rows, spectra_batch, SpectraArchive};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Assert that a decoded point lies within `tolerance` of `expected` on both axes.
#[track_caller]
pub fn assert_point_near(actual: (f64, f64), expected: (f64, f64), tolerance: f64) {
    let dx = (actual.0 - expected.0).abs();
    let dy = (actual.1 - expected.1).abs();
    assert!(
        dx <= tolerance && dy <= tolerance,
        "point {:?} is not within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}
