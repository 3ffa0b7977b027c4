// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid basics.
//!
//! Insert a few rectangles, dump the grid, list conflicts, then clear.
//!
//! Run:
//! - `cargo run -p crossroads_demos --example grid_basics`

use crossroads_grid::{Category, OccupancyGrid, RectObject};

fn main() -> Result<(), crossroads_grid::GridError> {
    let mut grid = OccupancyGrid::new(8, 12);

    let a = grid.insert(RectObject::new(Category::Car, 0, 3, 0, 3)?)?;
    let b = grid.insert(RectObject::new(Category::Car, 2, 5, 2, 5)?)?;
    let c = grid.insert(RectObject::new(Category::Lane, 6, 8, 0, 12)?)?;
    println!("inserted a={a:?} b={b:?} c={c:?}");
    print!("{grid}");

    for conflict in grid.conflicts() {
        let (first, second) = conflict.ids();
        println!(
            "conflict {first:?} x {second:?} over {:?}",
            conflict.overlap()
        );
    }

    // Outside the 8x12 grid: rejected, nothing painted.
    let err = grid
        .insert(RectObject::new(Category::Car, 7, 9, 0, 1)?)
        .unwrap_err();
    println!("rejected: {err}");

    // Clearing resets the paint only; the registry still knows about a and b.
    grid.clear();
    print!("{grid}");
    println!("conflicts after clear: {}", grid.conflicts().len());
    assert_eq!(grid.conflicts().len(), 2, "clear keeps the registry");
    Ok(())
}
