//! Cell storage for a fixed-size solve
//!
//! Each cell keeps the set of catalog entries still possible at its position.
//! Sets start full and only ever shrink. Positions are `[x, y]` with the
//! origin at the top-left; storage is row-major so the linear index of a
//! cell is `y * width + x`.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::TileDescriptor;

/// Cell coordinates as `[x, y]`
pub type Position = [usize; 2];

/// One grid position and its remaining candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    candidates: TileBitset,
}

impl Cell {
    /// Create a cell with its own copy of the candidate set
    pub const fn new(position: Position, candidates: TileBitset) -> Self {
        Self {
            position,
            candidates,
        }
    }

    /// Column of the cell
    pub const fn x(&self) -> usize {
        self.position[0]
    }

    /// Row of the cell
    pub const fn y(&self) -> usize {
        self.position[1]
    }

    /// Coordinates as `[x, y]`
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Catalog indices still possible here
    pub const fn candidates(&self) -> &TileBitset {
        &self.candidates
    }

    /// Number of remaining candidates
    pub fn entropy(&self) -> usize {
        self.candidates.count()
    }

    /// Whether exactly one candidate remains
    pub fn is_collapsed(&self) -> bool {
        self.candidates.only().is_some()
    }

    /// Whether no candidate remains
    pub fn is_contradicted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The assigned catalog index once collapsed
    pub fn collapsed_tile(&self) -> Option<usize> {
        self.candidates.only()
    }

    /// Drop every candidate outside `allowed`, returning how many were removed
    pub fn restrict_to(&mut self, allowed: &TileBitset) -> usize {
        let before = self.candidates.count();
        self.candidates.intersect_with(allowed);
        before - self.candidates.count()
    }

    /// Commit the cell to a single candidate it currently holds
    ///
    /// Returns `false` and leaves the cell untouched when `tile` is not a
    /// candidate, so a collapse can never grow the set.
    pub fn collapse_to(&mut self, tile: usize) -> bool {
        if !self.candidates.contains(tile) {
            return false;
        }
        self.candidates = TileBitset::single(self.candidates.capacity(), tile);
        true
    }
}

/// Rectangular arrangement of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cells indexed by `[y, x]`
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid where every cell holds the whole catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` or `height` is zero or exceeds [`MAX_GRID_DIMENSION`]
    /// - `catalog` is empty
    pub fn new(width: usize, height: usize, catalog: &[TileDescriptor]) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"grid dimensions must be positive",
                ));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if catalog.is_empty() {
            return Err(invalid_parameter(
                "catalog",
                &0,
                &"at least one tile descriptor is required",
            ));
        }

        let full = TileBitset::all(catalog.len());
        let cells = Array2::from_shape_fn((height, width), |(y, x)| Cell::new([x, y], full.clone()));

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; grids hold at least one cell
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major linear index of a position
    pub const fn index_of(&self, position: Position) -> Option<usize> {
        let [x, y] = position;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Position of a row-major linear index
    pub const fn position_of(&self, index: usize) -> Option<Position> {
        if index < self.len() {
            Some([index % self.width, index / self.width])
        } else {
            None
        }
    }

    /// Cell at a position
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        let [x, y] = position;
        self.cells.get([y, x])
    }

    /// Mutable cell at a position
    ///
    /// Cells only expose shrinking operations, so candidate sets stay
    /// monotonic. A [`Solver`](crate::algorithm::executor::Solver) never
    /// hands out its grid mutably.
    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let [x, y] = position;
        self.cells.get_mut([y, x])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Adjacent position in `direction`, or `None` on that edge
    pub const fn neighbor_of(&self, position: Position, direction: Direction) -> Option<Position> {
        let [x, y] = position;
        if x >= self.width || y >= self.height {
            return None;
        }
        match direction {
            Direction::Top if y > 0 => Some([x, y - 1]),
            Direction::Right if x + 1 < self.width => Some([x + 1, y]),
            Direction::Bottom if y + 1 < self.height => Some([x, y + 1]),
            Direction::Left if x > 0 => Some([x - 1, y]),
            _ => None,
        }
    }

    /// Existing neighbors of a position with the direction leading to each
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            self.neighbor_of(position, direction)
                .map(|neighbor| (direction, neighbor))
        })
    }

    /// Number of cells holding exactly one candidate
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Whether every cell holds exactly one candidate
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Positions of cells left without any candidate
    pub fn contradicted_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_contradicted())
            .map(Cell::position)
            .collect()
    }
}
