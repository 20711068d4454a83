use bitvec::prelude::*;
use std::collections::VecDeque;
use std::fmt;

use crate::{
    algorithm::compatibility::CompatibilityIndex,
    spatial::direction::Direction,
    spatial::grid::{Grid, Position},
};

/// A cell emptied while propagating
///
/// Records the emptied cell together with the changed neighbor whose
/// candidates no longer supported any of its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contradiction {
    /// Cell left without candidates
    pub position: Position,
    /// Cell whose change removed the last candidate
    pub source: Position,
    /// Direction from `source` to `position`
    pub direction: Direction,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}) emptied by its {} neighbor ({}, {})",
            self.position[0],
            self.position[1],
            self.direction.opposite(),
            self.source[0],
            self.source[1]
        )
    }
}

/// Work performed by one propagation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Cells taken from the queue
    pub cells_visited: usize,
    /// Neighbor updates that removed at least one candidate
    pub cells_changed: usize,
    /// Candidates removed across all cells
    pub candidates_removed: usize,
}

/// Queue of cells whose candidates changed and whose neighbors need revisiting
///
/// A cell is held at most once at a time; it may be queued again after it is
/// taken if its candidates shrink further.
#[derive(Debug, Clone)]
pub struct PropagationQueue {
    queue: VecDeque<Position>,
    /// Row-major membership flags mirroring `queue`
    queued: BitVec,
    width: usize,
}

impl PropagationQueue {
    /// Create an empty queue for a grid of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            queued: bitvec![0; width * height],
            width,
        }
    }

    /// Add a position unless it is already waiting
    pub fn push(&mut self, position: Position) {
        let index = position[1] * self.width + position[0];
        let Some(mut flag) = self.queued.get_mut(index) else {
            return;
        };
        if !*flag {
            *flag = true;
            self.queue.push_back(position);
        }
    }

    /// Remove and return the next position
    pub fn take_next(&mut self) -> Option<Position> {
        let position = self.queue.pop_front()?;
        self.queued
            .set(position[1] * self.width + position[0], false);
        Some(position)
    }

    /// Drop every pending position
    pub fn clear(&mut self) {
        self.queue.clear();
        self.queued.fill(false);
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of pending positions
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Restores local consistency after candidates change
///
/// Works through an explicit queue instead of recursing per neighbor, so
/// memory stays bounded by the grid size however long a cascade runs.
#[derive(Debug, Clone)]
pub struct PropagationEngine {
    pipeline: PropagationQueue,
}

impl PropagationEngine {
    /// Create an engine sized for the given grid
    pub fn new(grid: &Grid) -> Self {
        Self {
            pipeline: PropagationQueue::new(grid.width(), grid.height()),
        }
    }

    /// Propagate the consequences of a change at `origin`
    ///
    /// # Errors
    ///
    /// Returns the [`Contradiction`] for the first cell emptied. Propagation
    /// stops there and the emptied cell is left in the grid for inspection.
    pub fn propagate_from(
        &mut self,
        grid: &mut Grid,
        index: &CompatibilityIndex,
        origin: Position,
    ) -> Result<PropagationReport, Contradiction> {
        self.pipeline.push(origin);
        self.run(grid, index)
    }

    /// Propagate from every cell until the whole grid is consistent
    ///
    /// # Errors
    ///
    /// Returns the [`Contradiction`] for the first cell emptied.
    pub fn propagate_all(
        &mut self,
        grid: &mut Grid,
        index: &CompatibilityIndex,
    ) -> Result<PropagationReport, Contradiction> {
        for cell_index in 0..grid.len() {
            if let Some(position) = grid.position_of(cell_index) {
                self.pipeline.push(position);
            }
        }
        self.run(grid, index)
    }

    fn run(
        &mut self,
        grid: &mut Grid,
        index: &CompatibilityIndex,
    ) -> Result<PropagationReport, Contradiction> {
        let mut report = PropagationReport::default();

        while let Some(source) = self.pipeline.take_next() {
            report.cells_visited += 1;

            for direction in Direction::ALL {
                let Some(target) = grid.neighbor_of(source, direction) else {
                    continue;
                };
                let Some(allowed) = grid
                    .cell(source)
                    .map(|cell| index.supported(cell.candidates(), direction))
                else {
                    continue;
                };
                let Some(neighbor) = grid.cell_mut(target) else {
                    continue;
                };

                let removed = neighbor.restrict_to(&allowed);
                if removed == 0 {
                    continue;
                }
                report.cells_changed += 1;
                report.candidates_removed += removed;

                if neighbor.is_contradicted() {
                    self.pipeline.clear();
                    return Err(Contradiction {
                        position: target,
                        source,
                        direction,
                    });
                }
                self.pipeline.push(target);
            }
        }

        Ok(report)
    }
}

/// Find a candidate without any compatible partner in one of its neighbors
///
/// Returns the cell, the offending catalog index and the direction of the
/// neighbor lacking support. A grid left by a successful propagation never
/// yields a result.
pub fn find_unsupported(
    grid: &Grid,
    index: &CompatibilityIndex,
) -> Option<(Position, usize, Direction)> {
    for cell in grid.cells() {
        for (direction, neighbor_position) in grid.neighbors(cell.position()) {
            let Some(neighbor) = grid.cell(neighbor_position) else {
                continue;
            };
            for tile in cell.candidates().iter() {
                let supported = neighbor
                    .candidates()
                    .iter()
                    .any(|other| index.is_compatible(tile, direction, other));
                if !supported {
                    return Some((cell.position(), tile, direction));
                }
            }
        }
    }
    None
}
