//! Tiling state: the assignment of dominoes to an Aztec diamond
//!
//! A tiling maps each domino's *black anchor cell* to the direction the
//! domino points. The partner cell is not stored; it is recovered from the
//! anchor, the direction, and the order's parity, so the structure can never
//! desynchronize from the geometry. Storage is associative, keyed by
//! coordinates, so growing from order `n` to `n+1` migrates nothing.

use std::collections::HashMap;

use crate::io::error::{Result, ShuffleError};
use crate::spatial::{Cell, Coverage, CoverageMask, Diamond, Direction};

/// One domino: its black anchor, pointing direction, and the two cells it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domino {
    /// The black cell the tiling keys this domino by
    pub anchor: Cell,
    /// The direction one sliding step moves it
    pub direction: Direction,
    /// Both covered cells, lesser cell first
    pub cells: [Cell; 2],
}

/// The two cells covered by a domino with the given anchor at the given order
///
/// North and East dominoes have their lesser cell at even `(x + y + order)`
/// parity, South and West at odd. Since the anchor is black (even coordinate
/// sum), which side the partner sits on depends only on the direction and the
/// order's parity. Sliding advances both the cells and the order by one step,
/// which leaves the rule invariant.
pub const fn domino_cells(anchor: Cell, direction: Direction, order: u32) -> [Cell; 2] {
    let extent = direction.extent();
    let anchor_is_lesser = (order % 2 == 0) == direction.is_positive();
    if anchor_is_lesser {
        [anchor, anchor.offset(extent)]
    } else {
        [anchor.offset([-extent[0], -extent[1]]), anchor]
    }
}

/// A (possibly partial) assignment of dominoes to `Diamond(order)`
///
/// Between Deletion and Creation the tiling is expected to be partial; after
/// every completed shuffle cycle it must pass [`Tiling::verify`].
#[derive(Debug, Clone, Default)]
pub struct Tiling {
    order: u32,
    dominoes: HashMap<Cell, Direction>,
}

impl Tiling {
    /// An empty tiling of the diamond of the given order
    pub fn new(order: u32) -> Self {
        Self {
            order,
            dominoes: HashMap::new(),
        }
    }

    /// The trivial order-0 tiling the shuffle starts from
    ///
    /// `Diamond(0)` has no cells, so the empty assignment is complete.
    pub fn initial() -> Self {
        Self::new(0)
    }

    /// Build a tiling from explicit `(anchor, direction)` pairs
    ///
    /// Intended for fixtures and checkpoint restoration. The assignment may
    /// be partial but must be internally consistent.
    ///
    /// # Errors
    ///
    /// Returns a geometry violation if an anchor is not black, a domino
    /// leaves the diamond, or two dominoes overlap.
    pub fn with_dominoes(
        order: u32,
        dominoes: impl IntoIterator<Item = (Cell, Direction)>,
    ) -> Result<Self> {
        let mut tiling = Self::new(order);
        let mut mask = CoverageMask::new(order);
        for (anchor, direction) in dominoes {
            tiling.insert_checked(anchor, direction, &mut mask)?;
        }
        Ok(tiling)
    }

    /// Order of the diamond this tiling lives on
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// The diamond this tiling lives on
    pub const fn diamond(&self) -> Diamond {
        Diamond::new(self.order)
    }

    /// Number of dominoes currently placed
    pub fn domino_count(&self) -> usize {
        self.dominoes.len()
    }

    /// Whether no dominoes are placed
    pub fn is_empty(&self) -> bool {
        self.dominoes.is_empty()
    }

    /// Direction of the domino anchored at the given black cell, if any
    pub fn direction_at(&self, anchor: Cell) -> Option<Direction> {
        self.dominoes.get(&anchor).copied()
    }

    /// Raw anchor map, for renderers and serialization
    pub const fn anchors(&self) -> &HashMap<Cell, Direction> {
        &self.dominoes
    }

    /// Iterate all placed dominoes with their covered cells
    pub fn dominoes(&self) -> impl Iterator<Item = Domino> + '_ {
        self.dominoes.iter().map(|(&anchor, &direction)| Domino {
            anchor,
            direction,
            cells: domino_cells(anchor, direction, self.order),
        })
    }

    /// Iterate every covered cell with its domino's direction
    ///
    /// Yields two entries per domino; this is the queryable cell-to-
    /// orientation view renderers draw from.
    pub fn tiles(&self) -> impl Iterator<Item = (Cell, Direction)> + '_ {
        self.dominoes()
            .flat_map(|d| d.cells.into_iter().map(move |c| (c, d.direction)))
    }

    /// Stable serialization of the assignment: `(order, sorted anchor pairs)`
    ///
    /// Directions are a function of domino geometry and order, so equal
    /// canonical forms mean equal tilings.
    pub fn canonical_form(&self) -> (u32, Vec<(Cell, Direction)>) {
        let mut pairs: Vec<_> = self
            .dominoes
            .iter()
            .map(|(&anchor, &direction)| (anchor, direction))
            .collect();
        pairs.sort_unstable();
        (self.order, pairs)
    }

    /// Place a domino without consistency checks
    ///
    /// The phases maintain the invariants themselves and re-verify at cycle
    /// boundaries; external construction goes through [`Self::with_dominoes`].
    pub(crate) fn insert(&mut self, anchor: Cell, direction: Direction) {
        self.dominoes.insert(anchor, direction);
    }

    /// Remove the domino anchored at the given cell
    pub(crate) fn remove(&mut self, anchor: Cell) {
        self.dominoes.remove(&anchor);
    }

    fn insert_checked(
        &mut self,
        anchor: Cell,
        direction: Direction,
        mask: &mut CoverageMask,
    ) -> Result<()> {
        if !anchor.is_black() {
            return Err(ShuffleError::GeometryViolation {
                order: self.order,
                cell: anchor,
                reason: "domino anchor is not a black cell",
            });
        }
        for cell in domino_cells(anchor, direction, self.order) {
            match mask.cover(cell) {
                Coverage::Fresh => {}
                Coverage::Duplicate => {
                    return Err(ShuffleError::OverlappingDominoes {
                        order: self.order,
                        cell,
                    });
                }
                Coverage::Outside => {
                    return Err(ShuffleError::GeometryViolation {
                        order: self.order,
                        cell,
                        reason: "domino extends outside the diamond",
                    });
                }
            }
        }
        self.insert(anchor, direction);
        Ok(())
    }

    /// Coverage bitmap of the current assignment
    ///
    /// # Errors
    ///
    /// Returns a geometry violation if any domino leaves the diamond or two
    /// dominoes overlap; a partial cover is not an error here.
    pub fn coverage(&self) -> Result<CoverageMask> {
        let mut mask = CoverageMask::new(self.order);
        for domino in self.dominoes() {
            for cell in domino.cells {
                match mask.cover(cell) {
                    Coverage::Fresh => {}
                    Coverage::Duplicate => {
                        return Err(ShuffleError::OverlappingDominoes {
                            order: self.order,
                            cell,
                        });
                    }
                    Coverage::Outside => {
                        return Err(ShuffleError::GeometryViolation {
                            order: self.order,
                            cell,
                            reason: "domino extends outside the diamond",
                        });
                    }
                }
            }
        }
        Ok(mask)
    }

    /// Check every tiling invariant required after a completed cycle
    ///
    /// Every cell of the diamond must be covered exactly once and every
    /// anchor must be black. Adjacency and opposite coloring hold by
    /// construction of the anchor representation.
    ///
    /// # Errors
    ///
    /// Returns a geometry violation, overlap, or incompleteness error; all
    /// of these indicate an engine bug and abort the run.
    pub fn verify(&self) -> Result<()> {
        for (&anchor, _) in &self.dominoes {
            if !anchor.is_black() {
                return Err(ShuffleError::GeometryViolation {
                    order: self.order,
                    cell: anchor,
                    reason: "domino anchor is not a black cell",
                });
            }
        }
        let mask = self.coverage()?;
        let uncovered = mask.uncovered_count();
        if uncovered > 0 {
            return Err(ShuffleError::IncompleteTiling {
                order: self.order,
                uncovered,
                example: mask.first_uncovered(),
            });
        }
        Ok(())
    }
}
