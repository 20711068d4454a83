//! Unit tests mirroring the `src/` tree, one file per source module

use sockettile::TileDescriptor;

mod algorithm;
mod io;

/// Every combination of open (`"0"`) and wall (`"1"`) sides
///
/// Any set of side constraints can be met by some entry, so solves over this
/// catalog never reach a contradiction.
pub(crate) fn complete_catalog() -> Vec<TileDescriptor> {
    (0..16u8)
        .map(|bits| {
            let side = |shift: u8| if (bits >> shift) & 1 == 1 { "1" } else { "0" };
            TileDescriptor::new(side(0), side(1), side(2), side(3))
        })
        .collect()
}
