//! Dense coverage bitmap over a diamond's cells
//!
//! Backs the overlap and completeness checks that every phase runs
//! defensively. Cells are indexed row-major in the diamond's canonical
//! enumeration order, so the mask needs one bit per cell and no hashing.

use bitvec::prelude::{BitVec, bitvec};

use crate::spatial::cell::Cell;
use crate::spatial::diamond::Diamond;

/// Outcome of marking one cell as covered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// The cell was free and is now covered
    Fresh,
    /// The cell was already covered by another domino
    Duplicate,
    /// The cell lies outside the diamond
    Outside,
}

/// One bit of coverage state per cell of a fixed-order diamond
#[derive(Debug, Clone)]
pub struct CoverageMask {
    diamond: Diamond,
    /// Starting bit index of each row, south to north, plus the total
    row_starts: Vec<usize>,
    bits: BitVec,
}

impl CoverageMask {
    /// An all-uncovered mask for the diamond of the given order
    pub fn new(order: u32) -> Self {
        let diamond = Diamond::new(order);
        let n = order as i32;
        let mut row_starts = Vec::with_capacity(2 * order as usize + 1);
        let mut total = 0;
        for y in -n..n {
            row_starts.push(total);
            if let Some((lo, hi)) = diamond.row_span(y) {
                total += (hi - lo + 1) as usize;
            }
        }
        row_starts.push(total);

        Self {
            diamond,
            row_starts,
            bits: bitvec![0; total],
        }
    }

    /// The diamond this mask covers
    pub const fn diamond(&self) -> Diamond {
        self.diamond
    }

    /// Dense index of a cell, if it lies inside the diamond
    pub fn index(&self, cell: Cell) -> Option<usize> {
        let n = self.diamond.order() as i32;
        if !self.diamond.contains(cell) {
            return None;
        }
        let row = (cell.y + n) as usize;
        let (lo, _) = self.diamond.row_span(cell.y)?;
        let start = self.row_starts.get(row)?;
        Some(start + (cell.x - lo) as usize)
    }

    /// Cell at a dense index, the inverse of [`Self::index`]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        let row = self.row_starts.partition_point(|&start| start <= index);
        if row == 0 || row > 2 * self.diamond.order() as usize {
            return None;
        }
        let y = row as i32 - 1 - self.diamond.order() as i32;
        let start = self.row_starts.get(row - 1)?;
        let (lo, _) = self.diamond.row_span(y)?;
        Some(Cell::new(lo + (index - start) as i32, y))
    }

    /// Whether a cell is currently covered
    pub fn is_covered(&self, cell: Cell) -> bool {
        self.index(cell)
            .is_some_and(|i| self.bits.get(i).as_deref() == Some(&true))
    }

    /// Mark a cell covered, reporting what was there before
    pub fn cover(&mut self, cell: Cell) -> Coverage {
        match self.index(cell) {
            None => Coverage::Outside,
            Some(i) => {
                if self.bits.get(i).as_deref() == Some(&true) {
                    Coverage::Duplicate
                } else {
                    self.bits.set(i, true);
                    Coverage::Fresh
                }
            }
        }
    }

    /// Number of cells not yet covered
    pub fn uncovered_count(&self) -> usize {
        self.bits.len() - self.bits.count_ones()
    }

    /// Some cell not yet covered, if any remain
    pub fn first_uncovered(&self) -> Option<Cell> {
        self.bits.iter_zeros().next().and_then(|i| self.cell_at(i))
    }
}
