/// Fixed-size bitsets holding candidate tiles
pub mod bitset;
/// Precomputed per-direction neighbor sets for a tile catalog
pub mod compatibility;
/// Step-driven solver and its state machine
pub mod executor;
/// Worklist propagation of candidate removals
pub mod propagation;
/// Minimum-entropy cell search and seeded random choices
pub mod selection;
