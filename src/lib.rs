//! Socket-constrained wave function collapse for 2D tile grids
//!
//! Every tile is described by labels on its four sides. A solver assigns one
//! tile to each grid cell so that touching sides always carry equal labels,
//! collapsing the most constrained cell one step at a time and propagating
//! the consequences through an explicit worklist.

#![forbid(unsafe_code)]

/// Core algorithm implementation including compatibility, selection and propagation
pub mod algorithm;
/// Command-line driver, configuration, progress display and error handling
pub mod io;
/// Grid, direction and tile data structures
pub mod spatial;

pub use algorithm::compatibility::CompatibilityIndex;
pub use algorithm::executor::{SolveState, Solver};
pub use algorithm::propagation::Contradiction;
pub use io::error::{AlgorithmError, Result};
pub use spatial::{Direction, Grid, Position, TileDescriptor};
