use crate::{
    algorithm::bitset::TileBitset, spatial::direction::Direction, spatial::tiles::TileDescriptor,
};

/// Per-tile neighbor sets derived once from a tile catalog
///
/// For catalog entry `x` and direction `d`, the set holds every entry `y`
/// whose `d.opposite()` label equals the `d` label of `x`. The index owns
/// the catalog and is never mutated after construction, so one index can
/// back any number of grids and solvers.
#[derive(Debug, Clone)]
pub struct CompatibilityIndex {
    tiles: Vec<TileDescriptor>,
    /// Neighbor sets indexed by tile, then by [`Direction::index`]
    neighbors: Vec<[TileBitset; 4]>,
}

impl CompatibilityIndex {
    /// Compare every catalog entry against every other in all four directions
    ///
    /// Runs in O(N²) for N entries. An empty catalog yields an empty index;
    /// grids refuse to be built from one.
    pub fn new(tiles: Vec<TileDescriptor>) -> Self {
        let tile_count = tiles.len();

        let neighbors = tiles
            .iter()
            .map(|tile| {
                Direction::ALL.map(|direction| {
                    TileBitset::from_indices(
                        tiles
                            .iter()
                            .enumerate()
                            .filter(|(_, other)| tile.accepts(direction, other))
                            .map(|(index, _)| index),
                        tile_count,
                    )
                })
            })
            .collect();

        Self { tiles, neighbors }
    }

    /// Catalog entries in their original order
    pub fn tiles(&self) -> &[TileDescriptor] {
        &self.tiles
    }

    /// Catalog entry at the given index
    pub fn tile(&self, index: usize) -> Option<&TileDescriptor> {
        self.tiles.get(index)
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the first entry structurally equal to `tile`
    pub fn position(&self, tile: &TileDescriptor) -> Option<usize> {
        self.tiles.iter().position(|entry| entry == tile)
    }

    /// Entries allowed on the `direction` side of `tile`
    pub fn neighbors(&self, tile: usize, direction: Direction) -> Option<&TileBitset> {
        self.neighbors
            .get(tile)
            .and_then(|sets| sets.get(direction.index()))
    }

    /// Whether entry `other` may sit on the `direction` side of entry `tile`
    pub fn is_compatible(&self, tile: usize, direction: Direction, other: usize) -> bool {
        self.neighbors(tile, direction)
            .is_some_and(|allowed| allowed.contains(other))
    }

    /// Union of the `direction` neighbor sets of every candidate
    ///
    /// A neighbor candidate outside the result has no partner left among
    /// `candidates` and can be discarded.
    pub fn supported(&self, candidates: &TileBitset, direction: Direction) -> TileBitset {
        let mut allowed = TileBitset::new(self.len());
        for tile in candidates.iter() {
            if let Some(partners) = self.neighbors(tile, direction) {
                allowed.union_with(partners);
            }
        }
        allowed
    }
}
