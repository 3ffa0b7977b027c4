// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossroads Grid: a fixed-size occupancy grid of tagged rectangles.
//!
//! Crossroads Grid models a small world, such as a road intersection, as a matrix of
//! cells. Each cell holds a [`Category`] (empty, lane, car, ...). Rectangular
//! objects ([`RectObject`]) are placed onto the grid and paint their footprint with
//! their category.
//!
//! - Build rectangles with validated geometry, then [`translate`](RectObject::translate)
//!   or [`grow`](RectObject::grow) them. Invalid results are rejected and rolled back.
//! - [`OccupancyGrid::insert`] registers a rectangle and paints its cells.
//! - [`OccupancyGrid::conflicts`] lists every pair of registered rectangles whose
//!   footprints overlap, so a controller can react (remove a car, log an accident).
//!
//! The crate does not decide when objects move or what a conflict means. That belongs
//! to the controller driving the grid.
//!
//! # Example
//!
//! ```rust
//! use crossroads_grid::{Category, Direction, OccupancyGrid, RectObject};
//!
//! let mut grid = OccupancyGrid::new(12, 12);
//!
//! // A lane along x, and two cars on it.
//! grid.insert(RectObject::new(Category::Lane, 0, 12, 4, 6)?)?;
//! let mut a = RectObject::new(Category::Car, 0, 3, 4, 6)?;
//! let b = RectObject::new(Category::Car, 6, 9, 4, 6)?;
//!
//! // Drive car A forward and stretch it by one cell.
//! a.translate(2, 0)?;
//! a.grow(1, Direction::Right)?;
//! assert_eq!(a.length(), 4);
//!
//! let a_id = grid.insert(a)?;
//! let b_id = grid.insert(b)?;
//!
//! // A ends at x = 6 and B starts there: footprints are half-open, no crash.
//! let crashes: Vec<_> = grid
//!     .conflicts_filtered(Category::Car.into())
//!     .iter()
//!     .map(|c| c.ids())
//!     .collect();
//! assert!(crashes.is_empty());
//!
//! // Both cars still sit on the lane.
//! assert_eq!(grid.conflicts().len(), 4);
//! # let _ = (a_id, b_id);
//! # Ok::<(), crossroads_grid::GridError>(())
//! ```
//!
//! ## Paint and registry
//!
//! A grid keeps two independent pieces of state. The *paint* is the category of each
//! cell; [`OccupancyGrid::clear`] resets it. The *registry* is the ordered list of
//! every rectangle inserted so far; conflict scans read it, and `clear` does not
//! touch it. After a `clear`, conflicts between earlier insertions are still
//! reported even though the cells show nothing.
//!
//! The grid stores its own copy of each inserted rectangle. Moving the caller's
//! rectangle afterwards changes neither the paint nor the registry; insert it again
//! to register the new position.
//!
//! ## Conflict ordering
//!
//! [`OccupancyGrid::conflicts`] compares every ordered pair of distinct registry
//! entries and reports each overlapping pair in both orders, `(a, b)` and `(b, a)`.
//! Filter with `c.first.id < c.second.id` for one report per pair.
//!
//! ## Errors
//!
//! Every fallible operation returns a [`GridError`]:
//! [`GridError::InvalidGeometry`] for rectangles breaking `x1 < x2`, `y1 < y2`,
//! `x1 >= 0`, `y1 >= 0`, and [`GridError::OutOfBounds`] for inserts that would touch a
//! cell outside the grid. Failed calls leave their receiver unchanged.
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` support for [`GridError`].
//! - `kurbo`: conversions between [`RectObject`] and `kurbo::Rect`.
//! - `libm`: `no_std` float math for the `kurbo` conversions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod rect;
pub mod types;

pub use error::{GridError, GridResult};
pub use grid::{Active, Conflict, ObjectId, OccupancyGrid};
pub use rect::RectObject;
pub use types::{Category, CategorySet, Direction};
