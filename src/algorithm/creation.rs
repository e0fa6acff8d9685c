//! Creation phase: filling every empty 2×2 hole with a fresh domino pair
//!
//! After sliding, the uncovered cells of the grown diamond decompose into
//! disjoint 2×2 blocks whose southwest corners sit at odd `(x + y + order)`
//! parity. The scan verifies that decomposition cell by cell instead of
//! trusting it. Each block independently becomes either a horizontal pair
//! (North domino over South domino) or a vertical pair (West domino beside
//! East domino), the two halves pointing apart.

use crate::algorithm::randomness::OrientationSource;
use crate::algorithm::tiling::Tiling;
use crate::io::error::{Result, ShuffleError};
use crate::spatial::{Cell, Direction};

/// The black cell among a domino's two cells
fn black_cell_of(a: Cell, b: Cell) -> Cell {
    if a.is_black() { a } else { b }
}

/// Fill every hole of a post-slide tiling, returning the block count
///
/// Block draws come from the per-block orientation source, so the outcome is
/// a pure function of the seed and the block coordinates regardless of scan
/// order.
///
/// # Errors
///
/// Returns a [`ShuffleError::MalformedHole`] when the uncovered region is not
/// a disjoint union of aligned 2×2 blocks, and propagates coverage errors
/// from an inconsistent input tiling. Both indicate an upstream engine bug.
pub fn fill_holes(tiling: &mut Tiling, source: &OrientationSource) -> Result<usize> {
    let order = tiling.order();
    let diamond = tiling.diamond();
    let mut mask = tiling.coverage()?;
    let mut filled = 0;

    for corner in diamond.cells() {
        if mask.is_covered(corner) {
            continue;
        }

        // The scan runs south to north, west to east, so the first uncovered
        // cell of any hole must be a block's southwest corner.
        if (corner.x + corner.y + order as i32) % 2 == 0 {
            return Err(ShuffleError::MalformedHole {
                order,
                cell: corner,
            });
        }
        let east = corner.neighbor(Direction::East);
        let north = corner.neighbor(Direction::North);
        let northeast = east.neighbor(Direction::North);
        for cell in [east, north, northeast] {
            if !diamond.contains(cell) || mask.is_covered(cell) {
                return Err(ShuffleError::MalformedHole {
                    order,
                    cell: corner,
                });
            }
        }

        if source.draw_vertical(order, corner) {
            // West column beside East column, sliding apart.
            tiling.insert(black_cell_of(corner, north), Direction::West);
            tiling.insert(black_cell_of(east, northeast), Direction::East);
        } else {
            // North row above South row, sliding apart.
            tiling.insert(black_cell_of(north, northeast), Direction::North);
            tiling.insert(black_cell_of(corner, east), Direction::South);
        }

        for cell in [corner, east, north, northeast] {
            mask.cover(cell);
        }
        filled += 1;
    }

    Ok(filled)
}
