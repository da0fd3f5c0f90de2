//! Shared test utilities for the grid-extent workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Catalog grid-definition fixtures and an in-memory catalog
//! - Bitmap encoders for building decoder input
//! - Approximate float assertions
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
//! use test_utils::{assert_approx_eq, fixtures::grids, sample_catalog};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality of every edge of a `GeoDomain`.
///
/// ```ignore
/// assert_domain_approx_eq!(domain, (-130.0, 20.0, -70.0, 60.0), 1e-6);
/// ```
#[macro_export]
macro_rules! assert_domain_approx_eq {
    ($domain:expr, ($west:expr, $south:expr, $east:expr, $north:expr), $epsilon:expr) => {{
        let domain = $domain;
        $crate::assert_approx_eq!(domain.west, $west, $epsilon);
        $crate::assert_approx_eq!(domain.south, $south, $epsilon);
        $crate::assert_approx_eq!(domain.east, $east, $epsilon);
        $crate::assert_approx_eq!(domain.north, $north, $epsilon);
    }};
}
