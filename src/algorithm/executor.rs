use std::sync::Arc;

use rand::{Rng, rngs::StdRng};
use tracing::{debug, info, trace, warn};

use crate::{
    algorithm::compatibility::CompatibilityIndex,
    algorithm::propagation::{Contradiction, PropagationEngine, PropagationReport},
    algorithm::selection::{RandomSelector, minimum_entropy_cells},
    io::error::Result,
    spatial::grid::{Grid, Position},
    spatial::tiles::TileDescriptor,
};

/// Progress of a solve as observed after each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// At least one cell still holds several candidates
    Running,
    /// Every cell holds exactly one candidate
    Solved,
    /// A cell ran out of candidates; the solve cannot continue
    Contradiction(Contradiction),
}

impl SolveState {
    /// Whether no further step can change the grid
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Step-driven wave function collapse over a fixed grid
///
/// Each [`step`](Self::step) collapses one minimum-entropy cell to a random
/// candidate and propagates until the grid is locally consistent again. The
/// caller drives the loop and may inspect the grid between steps.
#[derive(Debug, Clone)]
pub struct Solver<R = StdRng> {
    index: Arc<CompatibilityIndex>,
    grid: Grid,
    engine: PropagationEngine,
    random_selector: RandomSelector<R>,
    state: SolveState,
    iteration: usize,
    /// Whether the initial full propagation has run
    settled: bool,
}

impl Solver<StdRng> {
    /// Create a solver with a seeded generator
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid or the catalog
    /// held by `index` is empty
    pub fn new(
        index: Arc<CompatibilityIndex>,
        width: usize,
        height: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::with_selector(index, width, height, RandomSelector::new(seed))
    }

    /// Build the compatibility index for `catalog` and create a seeded solver
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid or `catalog` is empty
    pub fn from_catalog(
        catalog: Vec<TileDescriptor>,
        width: usize,
        height: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::new(Arc::new(CompatibilityIndex::new(catalog)), width, height, seed)
    }
}

impl<R: Rng> Solver<R> {
    /// Create a solver drawing its choices from `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid or the catalog
    /// held by `index` is empty
    pub fn with_rng(
        index: Arc<CompatibilityIndex>,
        width: usize,
        height: usize,
        rng: R,
    ) -> Result<Self> {
        Self::with_selector(index, width, height, RandomSelector::from_rng(rng))
    }

    fn with_selector(
        index: Arc<CompatibilityIndex>,
        width: usize,
        height: usize,
        random_selector: RandomSelector<R>,
    ) -> Result<Self> {
        let grid = Grid::new(width, height, index.tiles())?;
        let engine = PropagationEngine::new(&grid);

        Ok(Self {
            index,
            grid,
            engine,
            random_selector,
            state: SolveState::Running,
            iteration: 0,
            settled: false,
        })
    }

    /// Advance the solve by one collapse
    ///
    /// The first call also propagates from every cell so that tiles without
    /// partners are removed before anything is chosen. Once a terminal state
    /// is reached, further calls return it without touching the grid.
    pub fn step(&mut self) -> SolveState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.iteration += 1;

        if !self.settled {
            self.settled = true;
            match self.engine.propagate_all(&mut self.grid, &self.index) {
                Ok(report) => self.log_propagation(None, &report),
                Err(contradiction) => return self.fail(contradiction),
            }
        }

        let tied = minimum_entropy_cells(&self.grid);
        let Some(&position) = self.random_selector.choose(&tied) else {
            return self.finish();
        };

        let Some(tile) = self.choose_candidate(position) else {
            // Tied cells always hold at least two candidates
            return self.finish();
        };
        if let Some(cell) = self.grid.cell_mut(position) {
            cell.collapse_to(tile);
        }
        debug!(
            iteration = self.iteration,
            x = position[0],
            y = position[1],
            tile,
            tied = tied.len(),
            "collapsed cell"
        );

        match self
            .engine
            .propagate_from(&mut self.grid, &self.index, position)
        {
            Ok(report) => self.log_propagation(Some(position), &report),
            Err(contradiction) => return self.fail(contradiction),
        }

        if self.grid.is_fully_collapsed() {
            self.finish()
        } else {
            SolveState::Running
        }
    }

    /// Step until a terminal state is reached
    ///
    /// Every non-terminal step collapses at least one cell, so this takes at
    /// most one step per cell.
    pub fn run(&mut self) -> SolveState {
        while !self.state.is_terminal() {
            self.step();
        }
        self.state
    }

    fn choose_candidate(&mut self, position: Position) -> Option<usize> {
        let cell = self.grid.cell(position)?;
        let choice = self.random_selector.uniform_index(cell.entropy())?;
        cell.candidates().nth(choice)
    }

    fn finish(&mut self) -> SolveState {
        info!(
            iteration = self.iteration,
            width = self.grid.width(),
            height = self.grid.height(),
            "grid solved"
        );
        self.state = SolveState::Solved;
        self.state
    }

    fn fail(&mut self, contradiction: Contradiction) -> SolveState {
        warn!(iteration = self.iteration, %contradiction, "contradiction reached");
        self.state = SolveState::Contradiction(contradiction);
        self.state
    }

    fn log_propagation(&self, origin: Option<Position>, report: &PropagationReport) {
        trace!(
            iteration = self.iteration,
            origin = ?origin,
            visited = report.cells_visited,
            changed = report.cells_changed,
            removed = report.candidates_removed,
            "propagation settled"
        );
    }
}

impl<R> Solver<R> {
    /// Current state of the solve
    pub const fn state(&self) -> SolveState {
        self.state
    }

    /// Read-only view of the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared compatibility index
    pub fn index(&self) -> &Arc<CompatibilityIndex> {
        &self.index
    }

    /// Number of steps taken that were not already terminal
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// The contradiction that ended the solve, if any
    pub const fn contradiction(&self) -> Option<Contradiction> {
        match self.state {
            SolveState::Contradiction(contradiction) => Some(contradiction),
            _ => None,
        }
    }

    /// Positions of all cells without candidates
    pub fn contradicted_cells(&self) -> Vec<Position> {
        self.grid.contradicted_cells()
    }

    /// Descriptor assigned to a collapsed cell
    pub fn tile_at(&self, position: Position) -> Option<&TileDescriptor> {
        self.grid
            .cell(position)
            .and_then(|cell| cell.collapsed_tile())
            .and_then(|tile| self.index.tile(tile))
    }

    /// Descriptors still possible at a cell, in catalog order
    pub fn candidates_at(&self, position: Position) -> Option<Vec<&TileDescriptor>> {
        let cell = self.grid.cell(position)?;
        Some(
            cell.candidates()
                .iter()
                .filter_map(|tile| self.index.tile(tile))
                .collect(),
        )
    }

    /// Row-major descriptors of a solved grid
    ///
    /// Returns `None` unless the solve finished in [`SolveState::Solved`].
    pub fn assignment(&self) -> Option<Vec<&TileDescriptor>> {
        if self.state != SolveState::Solved {
            return None;
        }
        self.grid
            .cells()
            .map(|cell| cell.collapsed_tile().and_then(|tile| self.index.tile(tile)))
            .collect()
    }
}
