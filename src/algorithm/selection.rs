use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::grid::{Grid, Position};

/// Uniform random choices backed by an injectable generator
///
/// Solves are reproducible whenever the generator is: two selectors built
/// from the same seed make identical choices.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing generator
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero
    pub fn uniform_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly chosen element of a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.uniform_index(items.len())
            .and_then(|index| items.get(index))
    }
}

/// Cells tied for the lowest candidate count among uncollapsed cells
///
/// Collapsed cells (one candidate) are never returned. The result is empty
/// once every cell is collapsed, and is in row-major order otherwise.
pub fn minimum_entropy_cells(grid: &Grid) -> Vec<Position> {
    let mut minimum = usize::MAX;
    let mut tied = Vec::new();

    for cell in grid.cells() {
        let entropy = cell.entropy();
        if entropy <= 1 || entropy > minimum {
            continue;
        }
        if entropy < minimum {
            minimum = entropy;
            tied.clear();
        }
        tied.push(cell.position());
    }

    tied
}
