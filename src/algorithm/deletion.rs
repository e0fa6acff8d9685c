//! Deletion phase: removal of head-to-head domino pairs
//!
//! A North domino directly below a South domino, or an East domino directly
//! left of a West domino, would swap places during the next slide. Each such
//! pair fills one 2×2 block and is removed whole. No other dominoes are
//! touched.

use crate::algorithm::tiling::{Tiling, domino_cells};
use crate::spatial::{Cell, Direction};

/// The black cell among a domino's two cells
fn black_cell_of(cells: [Cell; 2]) -> Cell {
    if cells[0].is_black() { cells[0] } else { cells[1] }
}

/// Remove every colliding pair from the tiling, returning the pair count
///
/// The rule is local to each 2×2 block and every domino participates in at
/// most one colliding block, so removals are collected first and applied
/// afterwards; evaluation order cannot change the result.
pub fn remove_colliding_pairs(tiling: &mut Tiling) -> usize {
    let order = tiling.order();
    let mut doomed: Vec<(Cell, Cell)> = Vec::new();

    for domino in tiling.dominoes() {
        // Each pair is discovered once, from its North or East member.
        let facing = match domino.direction {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South | Direction::West => continue,
        };

        let step = domino.direction.step();
        let ahead = domino.cells.map(|c| c.offset(step));
        let candidate = black_cell_of(ahead);

        if tiling.direction_at(candidate) == Some(facing)
            && domino_cells(candidate, facing, order) == ahead
        {
            doomed.push((domino.anchor, candidate));
        }
    }

    for &(a, b) in &doomed {
        tiling.remove(a);
        tiling.remove(b);
    }
    doomed.len()
}
