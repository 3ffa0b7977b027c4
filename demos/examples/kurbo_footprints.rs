// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo interop.
//!
//! Snap continuous Kurbo rectangles to whole grid cells, insert them, and convert
//! conflict overlaps back to Kurbo geometry for a renderer.
//!
//! Run:
//! - `cargo run -p crossroads_demos --example kurbo_footprints`

use crossroads_grid::{Category, GridError, OccupancyGrid, RectObject};
use kurbo::Rect;

fn main() -> Result<(), GridError> {
    let mut grid = OccupancyGrid::new(16, 16);

    let truck = RectObject::from_rect(Category::Car, Rect::new(1.2, 2.5, 6.7, 4.1))?;
    let bike = RectObject::from_rect(Category::Car, Rect::new(6.2, 3.9, 7.4, 4.6))?;
    println!("truck cells: {truck:?}");
    println!("bike cells:  {bike:?}");

    grid.insert(truck)?;
    grid.insert(bike)?;

    for conflict in grid.conflicts() {
        if let Some(overlap) = conflict.overlap() {
            println!("damage rect: {:?}", overlap.to_rect());
        }
    }

    let overlap = truck.intersection(&bike).map(|r| r.to_rect());
    assert_eq!(overlap, Some(Rect::new(6.0, 3.0, 7.0, 5.0)));
    Ok(())
}
