//! Lattice geometry for the Aztec diamond
//!
//! This module contains the pure geometric layer:
//! - Cells, parity coloring, and pointing directions
//! - Diamond regions with membership and enumeration queries
//! - Dense coverage bitmaps used for invariant checks

/// Cells, colors, and directions
pub mod cell;
/// Aztec diamond regions
pub mod diamond;
/// Coverage bitmaps over diamond cells
pub mod mask;

pub use cell::{Cell, Color, Direction};
pub use diamond::Diamond;
pub use mask::{Coverage, CoverageMask};
