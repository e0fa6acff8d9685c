/// Creation phase: random filling of empty 2×2 holes
pub mod creation;
/// Deletion phase: removal of head-to-head domino pairs
pub mod deletion;
/// Splittable per-block randomness for creation draws
pub mod randomness;
/// Shuffle driver orchestrating the three phases per order
pub mod shuffle;
/// Sliding phase: advancing dominoes into the grown diamond
pub mod sliding;
/// Tiling state and invariant verification
pub mod tiling;

pub use randomness::OrientationSource;
pub use shuffle::{DominoShuffler, Phase, run};
pub use tiling::{Domino, Tiling};
