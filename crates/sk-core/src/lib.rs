//! Foundational primitives for binary-raster thinning.
//!
//! ## Grid Layout
//! A [`Grid`] is a row-major `rows x cols` raster of `u8` cells, each either
//! [`BACKGROUND`] (`0`) or [`FOREGROUND`] (`1`). Both sides must be at least
//! [`MIN_SIDE`] so the grid has an interior. Coordinates are `(row, col)`
//! with `(0, 0)` at the top-left.
//!
//! ## Mutation
//! Grids are validated once at construction. Afterwards cells can only be
//! cleared (foreground to background), which is all a thinning pass needs.
//!
//! ## Neighborhoods
//! [`Neighborhood`] lists the 8 neighbors clockwise from north
//! (N, NE, E, SE, S, SW, W, NW). Offsets falling outside the grid are
//! dropped, so outer-ring pixels report fewer than 8 neighbors.

mod components;
mod error;
mod grid;
mod neighbors;

pub use components::count_components;
pub use error::Error;
pub use grid::{BACKGROUND, Coord, FOREGROUND, Grid, MIN_SIDE};
pub use neighbors::{NEIGHBOR_OFFSETS, Neighborhood};
