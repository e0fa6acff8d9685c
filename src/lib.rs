//! Uniformly random domino tilings of Aztec diamonds via domino shuffling
//!
//! The engine grows a tiling one order at a time: each cycle deletes
//! head-to-head domino pairs, slides every survivor one step along its
//! pointing direction into the next-larger diamond, and fills the resulting
//! 2×2 holes with independently oriented fresh pairs. After `n` cycles the
//! result is an exactly uniform sample from all tilings of the order-`n`
//! diamond.

#![forbid(unsafe_code)]

/// Shuffle phases, tiling state, and the sampling driver
pub mod algorithm;
/// CLI, rendering, progress, and error handling
pub mod io;
/// Mathematical utilities for sampling and testing
pub mod math;
/// Lattice geometry: cells, diamonds, and coverage masks
pub mod spatial;

pub use algorithm::shuffle::{DominoShuffler, Phase, run};
pub use algorithm::tiling::Tiling;
pub use io::error::{Result, ShuffleError};
pub use spatial::{Cell, Color, Diamond, Direction};
