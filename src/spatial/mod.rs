//! Spatial data structures for the solver
//!
//! This module contains spatial-related functionality including:
//! - Directions between adjacent cells
//! - Grid and cell storage with neighbor lookup
//! - Tile descriptors, socket labels and rotations

/// Cardinal directions and their opposites
pub mod direction;
/// Grid state management and neighbor lookup
pub mod grid;
/// Tile descriptors and the maze catalog
pub mod tiles;

pub use direction::Direction;
pub use grid::{Cell, Grid, Position};
pub use tiles::{Socket, TileDescriptor};
