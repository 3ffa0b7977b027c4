// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public tag types: cell categories, category masks, and growth directions.

/// Kind of a grid cell or of a placed rectangle.
///
/// Every cell of an [`OccupancyGrid`](crate::OccupancyGrid) holds exactly one
/// category, and every [`RectObject`](crate::RectObject) carries the category it
/// paints onto the cells of its footprint.
///
/// New kinds may be added in future releases, so matches outside this crate need a
/// wildcard arm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Category {
    /// Nothing occupies the cell.
    #[default]
    Empty,
    /// Road surface a car may drive on.
    Lane,
    /// A vehicle.
    Car,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Lane, Self::Car];

    /// Single-character glyph used by the textual grid dump.
    ///
    /// The mapping is fixed: `Empty` is `'e'`, `Lane` is `'l'`, `Car` is `'c'`.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => 'e',
            Self::Lane => 'l',
            Self::Car => 'c',
        }
    }

    /// Inverse of [`Category::glyph`]. Returns `None` for unknown glyphs.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'e' => Some(Self::Empty),
            'l' => Some(Self::Lane),
            'c' => Some(Self::Car),
            _ => None,
        }
    }

    /// The single-bit mask matching this category.
    pub const fn as_set(self) -> CategorySet {
        match self {
            Self::Empty => CategorySet::EMPTY,
            Self::Lane => CategorySet::LANE,
            Self::Car => CategorySet::CAR,
        }
    }
}

bitflags::bitflags! {
    /// Set of categories, used to restrict conflict scans.
    ///
    /// See [`OccupancyGrid::conflicts_filtered`](crate::OccupancyGrid::conflicts_filtered).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        /// Matches [`Category::Empty`].
        const EMPTY = 0b0000_0001;
        /// Matches [`Category::Lane`].
        const LANE  = 0b0000_0010;
        /// Matches [`Category::Car`].
        const CAR   = 0b0000_0100;
    }
}

impl CategorySet {
    /// Whether `category` is a member of this set.
    pub fn matches(self, category: Category) -> bool {
        self.contains(category.as_set())
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        category.as_set()
    }
}

/// Edge of a rectangle moved outward by [`RectObject::grow`](crate::RectObject::grow).
///
/// The y axis points up: `Up` moves the `y2` edge, `Down` moves the `y1` edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moves `x1` toward smaller x.
    Left,
    /// Moves `x2` toward larger x.
    Right,
    /// Moves `y2` toward larger y.
    Up,
    /// Moves `y1` toward smaller y.
    Down,
}
