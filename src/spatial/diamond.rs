//! Aztec diamond regions: membership, row spans, and cell enumeration

use crate::spatial::cell::Cell;

/// The Aztec diamond of a given order, centered on the coordinate origin
///
/// `Diamond(n)` is the set of cells `(x, y)` with `|2x+1| + |2y+1| ≤ 2n`,
/// i.e. all unit squares whose centers lie within taxicab distance `n` of
/// the origin. It holds exactly `2·n·(n+1)` cells; order 0 is the empty
/// diamond. All queries are pure functions of coordinates and order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diamond {
    order: u32,
}

impl Diamond {
    /// The diamond of the given order
    pub const fn new(order: u32) -> Self {
        Self { order }
    }

    /// Order of this diamond
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Number of cells, always `2·order·(order+1)`
    pub const fn cell_count(&self) -> usize {
        let n = self.order as usize;
        2 * n * (n + 1)
    }

    /// Whether a cell lies inside this diamond
    pub const fn contains(&self, cell: Cell) -> bool {
        let n = self.order as i32;
        (2 * cell.x + 1).abs() + (2 * cell.y + 1).abs() <= 2 * n
    }

    /// Inclusive `x` range of the diamond's row at height `y`, if non-empty
    pub const fn row_span(&self, y: i32) -> Option<(i32, i32)> {
        let n = self.order as i32;
        let k = (2 * y + 1).abs();
        if n == 0 || k > 2 * n - 1 {
            return None;
        }
        Some(((k - 1) / 2 - n, n - (k + 1) / 2))
    }

    /// Enumerate all cells, rows south to north, each row west to east
    ///
    /// The enumeration is lazy, finite, and restartable; repeated calls
    /// yield the identical sequence.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.order as i32;
        (-n..n).flat_map(move |y| {
            let (lo, hi) = self.row_span(y).unwrap_or((0, -1));
            (lo..=hi).map(move |x| Cell::new(x, y))
        })
    }
}
