// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The occupancy grid: cell storage, the active-object registry, and conflict scans.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use log::{debug, trace};

use crate::error::{GridError, GridResult};
use crate::rect::RectObject;
use crate::types::{Category, CategorySet};

/// Handle of an entry in a grid's active-object registry.
///
/// Handles are assigned in insertion order and stay valid for the lifetime of the
/// grid, since the grid never removes entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Object ids are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Position of the entry in [`OccupancyGrid::active_objects`].
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One side of a [`Conflict`]: a registry entry and the rectangle it holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Active<'a> {
    /// The registry entry.
    pub id: ObjectId,
    /// The rectangle stored in the entry.
    pub object: &'a RectObject,
}

/// Two distinct registry entries whose footprints share at least one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Conflict<'a> {
    /// Entry from the outer loop of the scan.
    pub first: Active<'a>,
    /// Entry from the inner loop of the scan.
    pub second: Active<'a>,
}

impl Conflict<'_> {
    /// The two entry handles, in scan order.
    pub const fn ids(&self) -> (ObjectId, ObjectId) {
        (self.first.id, self.second.id)
    }

    /// The cells both rectangles occupy, tagged with the first rectangle's category.
    pub fn overlap(&self) -> Option<RectObject> {
        self.first.object.intersection(self.second.object)
    }
}

/// A fixed-size matrix of [`Category`] cells plus the registry of inserted rectangles.
///
/// Cells are addressed as `(x, y)` with `x < size_x` and `y < size_y`. The grid
/// keeps two independent pieces of state:
///
/// - the *paint*: the category of every cell, written by [`insert`](Self::insert)
///   and reset by [`clear`](Self::clear);
/// - the *registry*: every rectangle ever inserted, in insertion order, read by
///   [`conflicts`](Self::conflicts).
///
/// `clear` only resets the paint. Conflict scans therefore keep seeing rectangles
/// the paint no longer shows.
#[derive(Clone)]
pub struct OccupancyGrid {
    size_x: usize,
    size_y: usize,
    cells: Vec<Category>,
    objects: Vec<RectObject>,
}

impl fmt::Debug for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let painted = self.cells.iter().filter(|&&c| c != Category::Empty).count();
        f.debug_struct("OccupancyGrid")
            .field("size_x", &self.size_x)
            .field("size_y", &self.size_y)
            .field("painted", &painted)
            .field("active", &self.objects.len())
            .finish_non_exhaustive()
    }
}

impl OccupancyGrid {
    /// Create a `size_x` by `size_y` grid with every cell [`Category::Empty`].
    ///
    /// A zero dimension gives a grid without cells; every insert into it fails.
    ///
    /// # Panics
    ///
    /// Panics if `size_x * size_y` overflows `usize`.
    pub fn new(size_x: usize, size_y: usize) -> Self {
        let len = size_x
            .checked_mul(size_y)
            .unwrap_or_else(|| panic!("grid of {size_x}x{size_y} cells overflows usize"));
        Self {
            size_x,
            size_y,
            cells: vec![Category::Empty; len],
            objects: Vec::new(),
        }
    }

    /// Number of cells along x.
    pub const fn size_x(&self) -> usize {
        self.size_x
    }

    /// Number of cells along y.
    pub const fn size_y(&self) -> usize {
        self.size_y
    }

    /// Category currently painted at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Category> {
        if x >= self.size_x || y >= self.size_y {
            return None;
        }
        self.cells.get(x * self.size_y + y).copied()
    }

    /// Number of cells currently painted with `category`.
    pub fn count(&self, category: Category) -> usize {
        self.cells.iter().filter(|&&c| c == category).count()
    }

    /// Register `object` and paint its footprint with its category.
    ///
    /// The footprint is checked against the grid first: if any of its cells lies
    /// outside, this returns [`GridError::OutOfBounds`] and neither the paint nor
    /// the registry changes. Otherwise the object is appended to the registry
    /// (duplicates included) and its cells are overwritten, whatever they held.
    pub fn insert(&mut self, object: RectObject) -> GridResult<ObjectId> {
        self.check_footprint(&object)?;

        let id = ObjectId::new(self.objects.len());
        self.objects.push(object);

        let (y1, y2) = (to_index(object.y1()), to_index(object.y2()));
        for x in to_index(object.x1())..to_index(object.x2()) {
            let column = x * self.size_y;
            self.cells[column + y1..column + y2].fill(object.category());
        }
        trace!("inserted {object:?} as {id:?}");
        Ok(id)
    }

    /// Reset every cell to [`Category::Empty`].
    ///
    /// The registry is left as is.
    pub fn clear(&mut self) {
        self.cells.fill(Category::Empty);
        trace!(
            "cleared {}x{} grid, {} objects stay active",
            self.size_x,
            self.size_y,
            self.objects.len()
        );
    }

    /// Every ordered pair of distinct registry entries whose footprints overlap.
    ///
    /// Each conflicting pair is reported twice, once as `(a, b)` and once as
    /// `(b, a)`. Results follow scan order: by first entry, then by second entry,
    /// both in insertion order. Entries are distinct when their handles differ, so
    /// a rectangle inserted twice conflicts with itself.
    ///
    /// The scan compares all `n * (n - 1)` ordered pairs.
    pub fn conflicts(&self) -> Vec<Conflict<'_>> {
        self.conflicts_filtered(CategorySet::all())
    }

    /// Like [`conflicts`](Self::conflicts), restricted to entries whose category is
    /// in `filter`.
    pub fn conflicts_filtered(&self, filter: CategorySet) -> Vec<Conflict<'_>> {
        let mut out = Vec::new();
        for (first, second) in self.candidate_pairs(filter) {
            if first.object.overlaps(second.object) {
                out.push(Conflict { first, second });
            }
        }
        debug!(
            "conflict scan over {} active objects found {} ordered pairs",
            self.objects.len(),
            out.len()
        );
        out
    }

    /// Whether [`conflicts`](Self::conflicts) would report anything.
    pub fn has_conflicts(&self) -> bool {
        self.candidate_pairs(CategorySet::all())
            .any(|(first, second)| first.object.overlaps(second.object))
    }

    /// Registry entry for `id`.
    pub fn get(&self, id: ObjectId) -> Option<&RectObject> {
        self.objects.get(id.index())
    }

    /// Every inserted rectangle, in insertion order.
    pub fn active_objects(&self) -> &[RectObject] {
        &self.objects
    }

    /// Registry entries with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Active<'_>> + '_ {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| Active {
                id: ObjectId::new(i),
                object,
            })
    }

    /// Number of registry entries.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Text rendering of the paint: one line per x, one glyph per y.
    ///
    /// See [`Category::glyph`] for the glyphs.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    fn candidate_pairs(
        &self,
        filter: CategorySet,
    ) -> impl Iterator<Item = (Active<'_>, Active<'_>)> + '_ {
        let matching = move |a: &Active<'_>| filter.matches(a.object.category());
        self.iter().filter(matching).flat_map(move |first| {
            self.iter()
                .filter(matching)
                .filter(move |second| second.id != first.id)
                .map(move |second| (first, second))
        })
    }

    fn check_footprint(&self, object: &RectObject) -> GridResult<()> {
        let max_x = i64::try_from(self.size_x).unwrap_or(i64::MAX);
        let max_y = i64::try_from(self.size_y).unwrap_or(i64::MAX);
        if object.x2() <= max_x && object.y2() <= max_y {
            return Ok(());
        }
        let x = if object.x2() > max_x {
            object.x2() - 1
        } else {
            object.x1()
        };
        let y = if object.y2() > max_y {
            object.y2() - 1
        } else {
            object.y1()
        };
        let err = GridError::out_of_bounds(x, y, self.size_x, self.size_y);
        debug!("rejected insert of {object:?}: {err}");
        Err(err)
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size_y == 0 {
            return Ok(());
        }
        for column in self.cells.chunks(self.size_y) {
            for cell in column {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Cell coordinate to storage index. Callers have already bounds-checked `v`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Coordinates are checked against usize grid sizes before conversion."
)]
const fn to_index(v: i64) -> usize {
    v as usize
}
