// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny controller driving cars through a four-way intersection.
//!
//! Each tick the controller moves its cars, rebuilds the grid from scratch (the
//! registry has no removal), and reacts to car-on-car conflicts by stopping both
//! cars involved.
//!
//! Run:
//! - `cargo run -p crossroads_demos --example intersection_traffic`

use std::collections::BTreeSet;

use crossroads_grid::{Category, CategorySet, GridError, OccupancyGrid, RectObject};

const SIZE: usize = 20;

struct Car {
    name: &'static str,
    rect: RectObject,
    step: (i64, i64),
    stopped: bool,
}

fn lanes() -> Result<[RectObject; 2], GridError> {
    Ok([
        RectObject::new(Category::Lane, 0, 20, 8, 12)?,
        RectObject::new(Category::Lane, 8, 12, 0, 20)?,
    ])
}

fn build_grid(cars: &[Car]) -> Result<OccupancyGrid, GridError> {
    let mut grid = OccupancyGrid::new(SIZE, SIZE);
    for lane in lanes()? {
        grid.insert(lane)?;
    }
    for car in cars {
        grid.insert(car.rect)?;
    }
    Ok(grid)
}

fn main() -> Result<(), GridError> {
    let mut cars = vec![
        Car {
            name: "eastbound",
            rect: RectObject::new(Category::Car, 0, 3, 8, 10)?,
            step: (2, 0),
            stopped: false,
        },
        Car {
            name: "northbound",
            rect: RectObject::new(Category::Car, 10, 12, 0, 3)?,
            step: (0, 2),
            stopped: false,
        },
    ];

    for tick in 0..8 {
        for car in cars.iter_mut().filter(|c| !c.stopped) {
            if let Err(err) = car.rect.translate(car.step.0, car.step.1) {
                println!("tick {tick}: {} cannot move: {err}", car.name);
                car.stopped = true;
            }
        }

        let grid = match build_grid(&cars) {
            Ok(grid) => grid,
            Err(err @ GridError::OutOfBounds { .. }) => {
                println!("tick {tick}: a car left the world ({err}), done");
                break;
            }
            Err(err) => return Err(err),
        };

        // Lanes occupy the first two registry slots.
        let crashed: BTreeSet<usize> = grid
            .conflicts_filtered(CategorySet::CAR)
            .iter()
            .map(|c| c.first.id.index() - 2)
            .collect();
        for &i in &crashed {
            println!("tick {tick}: {} is in a collision", cars[i].name);
            cars[i].stopped = true;
        }

        println!("tick {tick}:");
        print!("{grid}");
        if cars.iter().all(|c| c.stopped) {
            break;
        }
    }
    Ok(())
}
