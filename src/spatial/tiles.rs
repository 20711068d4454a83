//! Tile descriptors and socket labels
//!
//! A tile is described only by the labels on its four sides. Two tiles may
//! sit next to each other when the labels on their touching sides are equal.
//! Rotations let a small set of hand-written tiles cover every orientation.

use std::fmt;

use crate::io::configuration::{OPEN_SOCKET, WALL_SOCKET};
use crate::spatial::direction::Direction;

/// Compatibility label on one side of a tile
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Socket(Box<str>);

impl Socket {
    /// Create a socket from any label
    pub fn new(label: impl Into<Box<str>>) -> Self {
        Self(label.into())
    }

    /// Label as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Socket {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Socket {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable description of a tile type by its four side labels
///
/// Equality is structural: two descriptors are the same tile only when all
/// four labels match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileDescriptor {
    /// Labels indexed by [`Direction::index`]
    sockets: [Socket; 4],
}

impl TileDescriptor {
    /// Create a descriptor from its labels in clockwise order starting at the top
    pub fn new(
        top: impl Into<Socket>,
        right: impl Into<Socket>,
        bottom: impl Into<Socket>,
        left: impl Into<Socket>,
    ) -> Self {
        Self {
            sockets: [top.into(), right.into(), bottom.into(), left.into()],
        }
    }

    /// Label on the given side
    pub const fn socket(&self, direction: Direction) -> &Socket {
        match direction {
            Direction::Top => &self.sockets[0],
            Direction::Right => &self.sockets[1],
            Direction::Bottom => &self.sockets[2],
            Direction::Left => &self.sockets[3],
        }
    }

    /// Label on the top side
    pub const fn top(&self) -> &Socket {
        self.socket(Direction::Top)
    }

    /// Label on the right side
    pub const fn right(&self) -> &Socket {
        self.socket(Direction::Right)
    }

    /// Label on the bottom side
    pub const fn bottom(&self) -> &Socket {
        self.socket(Direction::Bottom)
    }

    /// Label on the left side
    pub const fn left(&self) -> &Socket {
        self.socket(Direction::Left)
    }

    /// Whether `other` may sit on the `direction` side of this tile
    ///
    /// The facing sides must carry the same label.
    pub fn accepts(&self, direction: Direction, other: &Self) -> bool {
        other.socket(direction.opposite()) == self.socket(direction)
    }

    /// Rotate the tile a quarter turn clockwise
    ///
    /// The left label moves to the top, the top label to the right, and so on.
    #[must_use]
    pub fn rotate_right(&self) -> Self {
        Self::new(
            self.left().clone(),
            self.top().clone(),
            self.right().clone(),
            self.bottom().clone(),
        )
    }

    /// The tile followed by its three successive clockwise rotations
    ///
    /// Symmetric tiles yield repeated descriptors; they are kept so callers
    /// can weight orientations by repetition.
    pub fn rotations(&self) -> [Self; 4] {
        let quarter = self.rotate_right();
        let half = quarter.rotate_right();
        let three_quarters = half.rotate_right();
        [self.clone(), quarter, half, three_quarters]
    }
}

impl fmt::Display for TileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {}]",
            self.top(),
            self.right(),
            self.bottom(),
            self.left()
        )
    }
}

/// Wall tiles for maze generation in every orientation
///
/// Sides carry [`WALL_SOCKET`] when closed and [`OPEN_SOCKET`] otherwise:
/// - One wall on the left, in four orientations
/// - Two opposite walls, in two orientations
/// - Two walls meeting in a corner, in four orientations
/// - Three walls, in four orientations
pub fn maze_catalog() -> Vec<TileDescriptor> {
    let (wall, open) = (WALL_SOCKET, OPEN_SOCKET);
    let mut catalog = Vec::with_capacity(14);

    catalog.extend(TileDescriptor::new(open, open, open, wall).rotations());

    let opposite_walls = TileDescriptor::new(open, wall, open, wall);
    let rotated = opposite_walls.rotate_right();
    catalog.push(opposite_walls);
    catalog.push(rotated);

    catalog.extend(TileDescriptor::new(wall, open, open, wall).rotations());
    catalog.extend(TileDescriptor::new(wall, open, wall, wall).rotations());

    catalog
}
