//! Sliding phase: every surviving domino moves one step along its direction
//!
//! The result is re-embedded in the next-order diamond. Diamond growth
//! guarantees containment of every slid domino; an out-of-bounds landing or
//! an overlap therefore indicates an upstream bug and is checked rather than
//! assumed.

use crate::algorithm::tiling::Tiling;
use crate::io::error::{Result, ShuffleError};
use crate::spatial::{Coverage, CoverageMask};

/// Slide all dominoes of a post-deletion tiling into `Diamond(order + 1)`
///
/// Never creates or destroys dominoes; the uncovered remainder of the larger
/// diamond is exactly the set of 2×2 holes Creation fills next.
///
/// # Errors
///
/// Returns a geometry violation if a slid domino leaves the larger diamond,
/// or an overlap error if two slid dominoes land on a common cell. Both are
/// fatal internal-consistency failures.
pub fn slide(tiling: &Tiling) -> Result<Tiling> {
    let next_order = tiling.order() + 1;
    let mut slid = Tiling::new(next_order);
    let mut mask = CoverageMask::new(next_order);

    for domino in tiling.dominoes() {
        let step = domino.direction.step();
        let landed = domino.cells.map(|c| c.offset(step));

        for cell in landed {
            match mask.cover(cell) {
                Coverage::Fresh => {}
                Coverage::Duplicate => {
                    return Err(ShuffleError::OverlappingDominoes {
                        order: next_order,
                        cell,
                    });
                }
                Coverage::Outside => {
                    return Err(ShuffleError::GeometryViolation {
                        order: next_order,
                        cell,
                        reason: "slid domino landed outside the grown diamond",
                    });
                }
            }
        }

        // One step flips both cells' parity, so the new anchor is the cell
        // the old white half moved onto.
        let anchor = if landed[0].is_black() {
            landed[0]
        } else {
            landed[1]
        };
        slid.insert(anchor, domino.direction);
    }

    Ok(slid)
}
