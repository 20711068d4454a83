//! Solver limits and command-line defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 12;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 8;

/// Default number of solves attempted before giving up on contradictions
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

// Maze catalog sockets
/// Socket label for a side closed by a wall
pub const WALL_SOCKET: &str = "1";
/// Socket label for an open side
pub const OPEN_SOCKET: &str = "0";

// Progress bar display settings
/// Number of attempt bars kept on screen before older ones are reused
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
