//! Construction-time validation errors.
//!
//! The hot per-cell loops never return a `Result`: out-of-range indices
//! there are the caller's responsibility and are only checked with
//! `debug_assert!`. These errors exist solely at the boundary where a
//! driver allocates a grid or installs a rule table, where a mistake
//! should fail loudly instead of corrupting memory four generations later.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid width {0} must be non-zero and a multiple of 16")]
    InvalidWidth(usize),

    #[error("grid height {0} must be non-zero")]
    InvalidHeight(usize),

    #[error("combo list has {actual} entries, need at least {required} for range {range}")]
    ComboListTooShort {
        actual: usize,
        required: usize,
        range: i32,
    },

    #[error("bounded grid rectangle ({min_x},{min_y})-({max_x},{max_y}) is empty or inverted")]
    InvalidBoundedRect {
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    },

    #[error("neighbourhood range {0} must be positive")]
    InvalidRange(i32),
}
