// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for rectangle and grid operations.

use thiserror::Error;

/// Result type alias for rectangle and grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors reported by [`RectObject`](crate::RectObject) and
/// [`OccupancyGrid`](crate::OccupancyGrid).
///
/// Both kinds are recoverable: the value that raised them is left exactly as it
/// was before the failing call.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Rectangle coordinates violate `x1 < x2`, `y1 < y2`, `x1 >= 0`, `y1 >= 0`.
    #[error("invalid rectangle geometry: x1={x1}, x2={x2}, y1={y1}, y2={y2}")]
    InvalidGeometry {
        /// Left edge (inclusive).
        x1: i64,
        /// Right edge (exclusive).
        x2: i64,
        /// Bottom edge (inclusive).
        y1: i64,
        /// Top edge (exclusive).
        y2: i64,
    },

    /// A footprint cell lies outside the grid.
    #[error("cell ({x}, {y}) is outside the {size_x}x{size_y} grid")]
    OutOfBounds {
        /// Offending cell x.
        x: i64,
        /// Offending cell y.
        y: i64,
        /// Grid width.
        size_x: usize,
        /// Grid height.
        size_y: usize,
    },
}

impl GridError {
    /// Create an invalid geometry error.
    #[must_use]
    pub const fn invalid_geometry(x1: i64, x2: i64, y1: i64, y2: i64) -> Self {
        Self::InvalidGeometry { x1, x2, y1, y2 }
    }

    /// Create an out of bounds error.
    #[must_use]
    pub const fn out_of_bounds(x: i64, y: i64, size_x: usize, size_y: usize) -> Self {
        Self::OutOfBounds {
            x,
            y,
            size_x,
            size_y,
        }
    }
}
