// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged axis-aligned rectangles on the integer cell lattice.

use log::debug;

use crate::error::{GridError, GridResult};
use crate::types::{Category, Direction};

/// An axis-aligned rectangle of grid cells tagged with a [`Category`].
///
/// The rectangle covers the half-open cell range `[x1, x2) × [y1, y2)`, its
/// *footprint*. Every value of this type satisfies
///
/// - `x1 < x2` and `y1 < y2` (at least one cell), and
/// - `x1 >= 0` and `y1 >= 0` (no negative cells).
///
/// The invariant is checked on construction and after every mutation. A mutation
/// that would break it returns [`GridError::InvalidGeometry`] and leaves the
/// rectangle untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RectObject {
    category: Category,
    x1: i64,
    x2: i64,
    y1: i64,
    y2: i64,
}

impl RectObject {
    /// Create a rectangle covering `[x1, x2) × [y1, y2)`.
    ///
    /// Note the argument order: both x edges come before both y edges.
    pub fn new(category: Category, x1: i64, x2: i64, y1: i64, y2: i64) -> GridResult<Self> {
        check_coordinates(x1, x2, y1, y2)?;
        Ok(Self {
            category,
            x1,
            x2,
            y1,
            y2,
        })
    }

    /// Create a rectangle from its lower-left cell and its size in cells.
    pub fn from_origin_size(
        category: Category,
        x: i64,
        y: i64,
        length: i64,
        height: i64,
    ) -> GridResult<Self> {
        let x2 = x.saturating_add(length);
        let y2 = y.saturating_add(height);
        Self::new(category, x, x2, y, y2)
    }

    /// The category painted by this rectangle.
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Left edge (inclusive).
    pub const fn x1(&self) -> i64 {
        self.x1
    }

    /// Right edge (exclusive).
    pub const fn x2(&self) -> i64 {
        self.x2
    }

    /// Bottom edge (inclusive).
    pub const fn y1(&self) -> i64 {
        self.y1
    }

    /// Top edge (exclusive).
    pub const fn y2(&self) -> i64 {
        self.y2
    }

    /// Extent along the x axis, in cells.
    pub const fn length(&self) -> i64 {
        self.x2 - self.x1
    }

    /// Extent along the y axis, in cells.
    pub const fn height(&self) -> i64 {
        self.y2 - self.y1
    }

    /// Number of cells in the footprint.
    pub const fn area(&self) -> i128 {
        self.length() as i128 * self.height() as i128
    }

    /// Shift the rectangle by `(dx, dy)` cells.
    ///
    /// Fails with [`GridError::InvalidGeometry`] if the moved rectangle would reach
    /// a negative coordinate (or overflow); the rectangle is then unchanged.
    pub fn translate(&mut self, dx: i64, dy: i64) -> GridResult<()> {
        let moved = (
            self.x1.checked_add(dx),
            self.x2.checked_add(dx),
            self.y1.checked_add(dy),
            self.y2.checked_add(dy),
        );
        let (Some(x1), Some(x2), Some(y1), Some(y2)) = moved else {
            return Err(self.overflow_error(dx, dx, dy, dy));
        };
        self.apply(x1, x2, y1, y2)
    }

    /// Move one edge of the rectangle outward by `factor` cells.
    ///
    /// `Left` lowers `x1`, `Right` raises `x2`, `Up` raises `y2` and `Down` lowers
    /// `y1`. A negative `factor` moves the edge inward. Fails with
    /// [`GridError::InvalidGeometry`] if the result breaks the invariant; the
    /// rectangle is then unchanged.
    pub fn grow(&mut self, factor: i64, direction: Direction) -> GridResult<()> {
        let Self { x1, x2, y1, y2, .. } = *self;
        let grown = match direction {
            Direction::Left => x1.checked_sub(factor).map(|x1| (x1, x2, y1, y2)),
            Direction::Right => x2.checked_add(factor).map(|x2| (x1, x2, y1, y2)),
            Direction::Up => y2.checked_add(factor).map(|y2| (x1, x2, y1, y2)),
            Direction::Down => y1.checked_sub(factor).map(|y1| (x1, x2, y1, y2)),
        };
        let Some((x1, x2, y1, y2)) = grown else {
            let (dx1, dx2, dy1, dy2) = match direction {
                Direction::Left => (factor.saturating_neg(), 0, 0, 0),
                Direction::Right => (0, factor, 0, 0),
                Direction::Up => (0, 0, 0, factor),
                Direction::Down => (0, 0, factor.saturating_neg(), 0),
            };
            return Err(self.overflow_error(dx1, dx2, dy1, dy2));
        };
        self.apply(x1, x2, y1, y2)
    }

    /// Every cell of the footprint, x-major.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (y1, y2) = (self.y1, self.y2);
        (self.x1..self.x2).flat_map(move |x| (y1..y2).map(move |y| (x, y)))
    }

    /// Whether the footprint contains cell `(x, y)`.
    pub const fn contains_cell(&self, x: i64, y: i64) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }

    /// Whether the two footprints share at least one cell.
    ///
    /// Footprints are half-open, so rectangles that only touch along an edge do
    /// not overlap. The test is symmetric.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    /// The cells shared with `other`, tagged with this rectangle's category.
    ///
    /// Returns `None` when the footprints do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            category: self.category,
            x1: self.x1.max(other.x1),
            x2: self.x2.min(other.x2),
            y1: self.y1.max(other.y1),
            y2: self.y2.min(other.y2),
        })
    }

    fn apply(&mut self, x1: i64, x2: i64, y1: i64, y2: i64) -> GridResult<()> {
        check_coordinates(x1, x2, y1, y2)?;
        self.x1 = x1;
        self.x2 = x2;
        self.y1 = y1;
        self.y2 = y2;
        Ok(())
    }

    fn overflow_error(&self, dx1: i64, dx2: i64, dy1: i64, dy2: i64) -> GridError {
        let err = GridError::invalid_geometry(
            self.x1.saturating_add(dx1),
            self.x2.saturating_add(dx2),
            self.y1.saturating_add(dy1),
            self.y2.saturating_add(dy2),
        );
        debug!("rejected overflowing move of {self:?}: {err}");
        err
    }
}

#[cfg(feature = "kurbo")]
impl RectObject {
    /// The footprint as a Kurbo rectangle, one unit per cell.
    pub fn to_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.x1 as f64,
            self.y1 as f64,
            self.x2 as f64,
            self.y2 as f64,
        )
    }

    /// The smallest rectangle of whole cells covering `rect`.
    ///
    /// Coordinates are rounded outward, so any partially covered cell is included.
    pub fn from_rect(category: Category, rect: kurbo::Rect) -> GridResult<Self> {
        let r = rect.abs().expand();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "`expand` yields whole numbers; out-of-range values saturate."
        )]
        let (x1, y1, x2, y2) = (r.x0 as i64, r.y0 as i64, r.x1 as i64, r.y1 as i64);
        Self::new(category, x1, x2, y1, y2)
    }
}

fn check_coordinates(x1: i64, x2: i64, y1: i64, y2: i64) -> GridResult<()> {
    if x2 <= x1 || y2 <= y1 || x1 < 0 || y1 < 0 {
        let err = GridError::invalid_geometry(x1, x2, y1, y2);
        debug!("rejected rectangle: {err}");
        return Err(err);
    }
    Ok(())
}
