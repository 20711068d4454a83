//! Plain-text rendering of grid states for terminals and files
//!
//! Cells whose tile carries a wall socket on a side draw that side. Open
//! cells show their remaining candidate count so intermediate states stay
//! readable.

use std::fmt::Write;

use crate::algorithm::compatibility::CompatibilityIndex;
use crate::io::configuration::WALL_SOCKET;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Cell, Grid, Position};

/// Render the grid as box-drawing text
///
/// Each cell occupies three columns between `+` corners. A side is drawn when
/// the collapsed tile on either side of it carries [`WALL_SOCKET`] there.
pub fn render_text(grid: &Grid, index: &CompatibilityIndex) -> String {
    let mut out = String::with_capacity((grid.width() * 4 + 2) * (grid.height() * 2 + 1));

    for y in 0..grid.height() {
        push_edge_row(&mut out, grid, index, y, Direction::Top);

        for x in 0..grid.width() {
            let vertical = has_wall(grid, index, [x, y], Direction::Left);
            out.push(if vertical { '|' } else { ' ' });
            if let Some(cell) = grid.cell([x, y]) {
                out.push_str(&interior(cell));
            }
        }
        let last = [grid.width() - 1, y];
        out.push(if has_wall(grid, index, last, Direction::Right) {
            '|'
        } else {
            ' '
        });
        out.push('\n');
    }

    if grid.height() > 0 {
        push_edge_row(&mut out, grid, index, grid.height() - 1, Direction::Bottom);
    }

    out
}

fn push_edge_row(
    out: &mut String,
    grid: &Grid,
    index: &CompatibilityIndex,
    y: usize,
    side: Direction,
) {
    for x in 0..grid.width() {
        out.push('+');
        out.push_str(if has_wall(grid, index, [x, y], side) {
            "---"
        } else {
            "   "
        });
    }
    out.push_str("+\n");
}

fn interior(cell: &Cell) -> String {
    match cell.entropy() {
        0 => " ! ".to_string(),
        1 => "   ".to_string(),
        count @ 2..=9 => format!(" {count} "),
        _ => " * ".to_string(),
    }
}

/// Whether the side of `position` facing `direction` is drawn as a wall
fn has_wall(
    grid: &Grid,
    index: &CompatibilityIndex,
    position: Position,
    direction: Direction,
) -> bool {
    collapsed_wall(grid, index, position, direction)
        || grid
            .neighbor_of(position, direction)
            .is_some_and(|neighbor| collapsed_wall(grid, index, neighbor, direction.opposite()))
}

fn collapsed_wall(
    grid: &Grid,
    index: &CompatibilityIndex,
    position: Position,
    direction: Direction,
) -> bool {
    grid.cell(position)
        .and_then(Cell::collapsed_tile)
        .and_then(|tile| index.tile(tile))
        .is_some_and(|tile| tile.socket(direction).as_str() == WALL_SOCKET)
}

/// Records rendered frames while a solve progresses
///
/// Each frame is labelled with the step that produced it.
#[derive(Debug, Default, Clone)]
pub struct VisualizationCapture {
    frames: Vec<(usize, String)>,
}

impl VisualizationCapture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Render and store the current grid
    pub fn record(&mut self, iteration: usize, grid: &Grid, index: &CompatibilityIndex) {
        self.frames.push((iteration, render_text(grid, index)));
    }

    /// Number of recorded frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame was recorded
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All frames joined with step headers
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (iteration, frame) in &self.frames {
            // Writing into a String cannot fail
            let _ = writeln!(out, "step {iteration}");
            out.push_str(frame);
            out.push('\n');
        }
        out
    }
}
